use super::metadata::Version;

// Data path over the symbol, in placement order
//------------------------------------------------------------------------------

/// Walks every module of the symbol in the zigzag placement order: two
/// column strips from the right edge, alternating upward and downward, with
/// the vertical timing column skipped. Callers filter out reserved modules.
pub struct DataPath {
    r: i16,
    // Right column of the current strip
    c: i16,
    // 0 for the right column of the strip, 1 for the left
    offset: i16,
    upward: bool,
    width: i16,
}

impl DataPath {
    pub fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { r: w - 1, c: w - 1, offset: 0, upward: true, width: w }
    }

    fn next_strip(&mut self) {
        self.upward = !self.upward;
        self.c -= 2;
        if self.c == TIMING_COL {
            self.c -= 1;
        }
    }
}

impl Iterator for DataPath {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 0 {
            return None;
        }
        let res = (self.r, self.c - self.offset);
        if self.offset == 0 {
            self.offset = 1;
            return Some(res);
        }

        self.offset = 0;
        match self.upward {
            true if self.r > 0 => self.r -= 1,
            false if self.r < self.width - 1 => self.r += 1,
            _ => self.next_strip(),
        }
        Some(res)
    }
}


// Global constants
//------------------------------------------------------------------------------

const TIMING_COL: i16 = 6;
