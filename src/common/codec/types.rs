use crate::common::metadata::Version;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
}

impl Mode {
    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Numeric.contains(char), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    fn alphanumeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Alphanumeric.contains(char), "Invalid alphanumeric data: {char}");
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alphanumeric => {
                byte.is_ascii_digit() || byte.is_ascii_uppercase() || b" $%*+-./:".contains(&byte)
            }
            Self::Byte => true,
        }
    }

    // Narrowest mode able to hold the whole of a non-empty text
    pub fn classify(data: &[u8]) -> Mode {
        if data.is_empty() {
            return Self::Byte;
        }
        [Self::Numeric, Self::Alphanumeric]
            .into_iter()
            .find(|m| data.iter().all(|&b| m.contains(b)))
            .unwrap_or(Self::Byte)
    }

    // Characters packed into one chunk
    pub fn chunk_size(&self) -> usize {
        match self {
            Self::Numeric => 3,
            Self::Alphanumeric => 2,
            Self::Byte => 1,
        }
    }

    pub fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric conver: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                debug_assert!(len <= 2, "Data is too long for alphanumeric conver: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte => {
                debug_assert!(len == 1, "Data is too long for byte conver: {len}");
                data[0] as u16
            }
        }
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
        }
    }

    pub fn char_cnt_bits(&self, band: Band) -> usize {
        match (self, band) {
            (Self::Numeric, Band::Small) => 10,
            (Self::Numeric, Band::Medium) => 12,
            (Self::Numeric, Band::Large) => 14,
            (Self::Alphanumeric, Band::Small) => 9,
            (Self::Alphanumeric, Band::Medium) => 11,
            (Self::Alphanumeric, Band::Large) => 13,
            (Self::Byte, Band::Small) => 8,
            (Self::Byte, Band::Medium | Band::Large) => 16,
        }
    }

    // Hard ceiling in characters, or bytes for byte mode
    pub fn max_len(&self) -> usize {
        match self {
            Self::Numeric => 7089,
            Self::Alphanumeric => 4296,
            Self::Byte => 2953,
        }
    }
}


// Version band, over which the char count indicator width is fixed
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Band {
    // Versions 1 to 9
    Small = 0,
    // Versions 10 to 26
    Medium = 1,
    // Versions 27 to 40
    Large = 2,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Small, Band::Medium, Band::Large];

    pub fn of(version: Version) -> Self {
        match *version {
            1..=9 => Self::Small,
            10..=26 => Self::Medium,
            _ => Self::Large,
        }
    }

    pub fn versions(self) -> impl Iterator<Item = Version> {
        let range = match self {
            Self::Small => 1..=9,
            Self::Medium => 10..=26,
            Self::Large => 27..=40,
        };
        range.map(Version::new_unchecked)
    }
}

#[cfg(test)]
mod band_tests {
    use super::Band;
    use crate::common::metadata::Version;

    #[test]
    fn test_band_covers_all_versions() {
        let versions = Band::ALL.iter().flat_map(|b| b.versions()).collect::<Vec<_>>();
        assert_eq!(versions, Version::all().collect::<Vec<_>>());
        for v in Version::all() {
            assert!(Band::of(v).versions().any(|bv| bv == v));
        }
    }
}
