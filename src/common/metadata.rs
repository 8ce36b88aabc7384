use std::fmt::{Display, Formatter};
use std::ops::{Deref, Not};
use std::str::FromStr;

use super::error::{QRError, QRResult};
use super::mask::MaskPattern;
use super::version_db::Template;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[cfg(test)]
    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    #[default]
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    // Two bit indicator stored in the format info
    pub fn format_bits(self) -> u32 {
        match self {
            Self::L => 0b01,
            Self::M => 0b00,
            Self::Q => 0b11,
            Self::H => 0b10,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}


// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(40);

    pub fn new(version: usize) -> QRResult<Self> {
        match version {
            1..=40 => Ok(Self(version)),
            _ => Err(QRError::InvalidVersion),
        }
    }

    pub(crate) fn new_unchecked(version: usize) -> Self {
        debug_assert!(version >= 1 && version <= 40, "Invalid version");
        Self(version)
    }

    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Self)
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    // Centres of alignment patterns, shared by rows and columns
    pub fn alignment_pattern(self) -> Vec<i16> {
        if self.0 == 1 {
            return Vec::new();
        }

        let span = self.width() - 13;
        let intervals = span.div_ceil(28);
        let mut step = (2 * span + intervals) / (2 * intervals);
        if step & 1 == 1 {
            step += 1;
        }

        // Stepping back from the last centre, which sits 7 modules off the far edge
        let last = (span + 6) as i16;
        let step = step as i16;
        let mut res = vec![6];
        res.extend((0..intervals as i16).rev().map(|k| last - k * step));
        res
    }

    // 18 bit version info, zero for versions without a version block
    pub fn info(self) -> u32 {
        VERSION_INFOS[self.0]
    }

    pub fn total_codewords(self) -> usize {
        Template::get(self, ECLevel::L).total_codewords()
    }

    // Modules on the data path once every function pattern is in place
    pub fn data_modules(self) -> usize {
        let v = self.0;
        let mut res = (16 * v + 128) * v + 64;
        if v >= 2 {
            let align = v / 7 + 2;
            res -= (25 * align - 10) * align - 55;
            if v >= 7 {
                res -= 36;
            }
        }
        res
    }

    pub fn remainder_bits(self) -> usize {
        self.data_modules() - (self.total_codewords() << 3)
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


// Format info
//------------------------------------------------------------------------------

pub fn format_info(ec_level: ECLevel, mask: MaskPattern) -> u32 {
    FORMAT_INFOS[((ec_level.format_bits() << 3) | *mask as u32) as usize]
}

// Remainder of the BCH division of `data << shift` by `generator`, highest term first
const fn bch_remainder(data: u32, shift: u32, terms: u32, generator: u32) -> u32 {
    let mut rem = data << shift;
    let mut i = terms;
    while i > 0 {
        if rem >> (shift - 1 + i) != 0 {
            rem ^= generator << (i - 1);
        }
        i -= 1;
    }
    rem
}

const fn build_format_infos() -> [u32; 32] {
    let mut res = [0; 32];
    let mut fmt = 0;
    while fmt < 32 {
        let rem = bch_remainder(fmt, 10, 5, FORMAT_INFO_GENERATOR);
        res[fmt as usize] = (rem | (fmt << 10)) ^ FORMAT_INFO_MASK;
        fmt += 1;
    }
    res
}

const fn build_version_infos() -> [u32; 41] {
    let mut res = [0; 41];
    let mut ver = 7;
    while ver <= 40 {
        let rem = bch_remainder(ver, 12, 6, VERSION_INFO_GENERATOR);
        res[ver as usize] = rem | (ver << 12);
        ver += 1;
    }
    res
}


// Global constants
//------------------------------------------------------------------------------

pub static FORMAT_INFO_BIT_LEN: usize = 15;

pub static VERSION_INFO_BIT_LEN: usize = 18;

const FORMAT_INFO_GENERATOR: u32 = 0x0537;

const FORMAT_INFO_MASK: u32 = 0x5412;

const VERSION_INFO_GENERATOR: u32 = 0x1f25;

static FORMAT_INFOS: [u32; 32] = build_format_infos();

static VERSION_INFOS: [u32; 41] = build_version_infos();
