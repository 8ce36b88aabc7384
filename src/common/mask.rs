use std::fmt::{Display, Formatter};
use std::ops::Deref;

use log::trace;

use super::error::{QRError, QRResult};
use super::metadata::Color;
use crate::builder::QR;

// Mask pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern(0),
        MaskPattern(1),
        MaskPattern(2),
        MaskPattern(3),
        MaskPattern(4),
        MaskPattern(5),
        MaskPattern(6),
        MaskPattern(7),
    ];

    pub fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern)
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QRError;

    fn try_from(pattern: u8) -> QRResult<Self> {
        match pattern {
            0..=7 => Ok(Self(pattern)),
            _ => Err(QRError::InvalidMaskingPattern),
        }
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for MaskPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        let p = r * c;
        (p & 1) + (p % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        let p = r * c;
        ((p & 1) + (p % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r * c) % 3) + ((r + c) & 1)) & 1 == 0
    }
}

impl MaskPattern {
    // Predicate over (row, col), true where the module flips
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern {}", self.0),
        }
    }
}


// Mask selection
//------------------------------------------------------------------------------

/// Masks `qr` with the pattern of least penalty, the lowest index among ties.
pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    let scores = MaskPattern::ALL.map(|m| {
        let mut masked = qr.clone();
        masked.apply_mask(m);
        let penalty = compute_total_penalty(&masked);
        trace!("Mask {m} scores penalty {penalty}");
        penalty
    });
    let best = MaskPattern::ALL
        .into_iter()
        .zip(scores)
        .min_by_key(|&(_, penalty)| penalty)
        .map_or(MaskPattern(0), |(m, _)| m);
    qr.apply_mask(best);
    best
}

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

// Each maximal run of five or more same colored modules scores its length minus two
fn run_penalty(line: impl Iterator<Item = Color>) -> u32 {
    let mut pen = 0;
    let mut last = None;
    let mut len = 0;
    for clr in line {
        if last == Some(clr) {
            len += 1;
            continue;
        }
        if len >= 5 {
            pen += len - 2;
        }
        last = Some(clr);
        len = 1;
    }
    if len >= 5 {
        pen += len - 2;
    }
    pen
}

fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i16;
    let row = |i: i16| run_penalty((0..w).map(move |j| *qr.get(i, j)));
    let col = |i: i16| run_penalty((0..w).map(move |j| *qr.get(j, i)));
    (0..w).map(|i| row(i) + col(i)).sum()
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// 1:1:3:1:1 finder-like runs, scored once per light quiet side of four modules
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let get = |j: i16| if is_hor { *qr.get(i, j) } else { *qr.get(j, i) };
        let light = |range: std::ops::Range<i16>| range.map(get).all(|clr| clr == Color::Light);
        for j in 0..w - 6 {
            if (j..j + 7).map(get).ne(FINDER_LIKE_PATTERN) {
                continue;
            }
            if j >= 4 && light(j - 4..j) {
                pen += 40;
            }
            if j < w - 10 && light(j + 7..j + 11) {
                pen += 40;
            }
        }
    }
    pen
}

fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules() as i64;
    let w = qr.width() as i64;
    let tot = w * w;
    let deviation = (tot * 10 - dark_cnt * 20).unsigned_abs() / tot as u64;
    deviation as u32 * 10
}


// Global constants
//------------------------------------------------------------------------------

static FINDER_LIKE_PATTERN: [Color; 7] = [
    Color::Dark,
    Color::Light,
    Color::Dark,
    Color::Dark,
    Color::Dark,
    Color::Light,
    Color::Dark,
];
