use std::sync::OnceLock;

use super::metadata::{ECLevel, Version};

// Template
//------------------------------------------------------------------------------

/// Codeword layout of one (version, ec level) pair.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Template {
    version: Version,
    // Data codewords across all blocks
    data_len: usize,
    // Error correction codewords per block
    ec_len: usize,
    // Data codewords of each block, shorter blocks first
    block_lens: Vec<usize>,
}

impl Template {
    pub fn get(version: Version, ec_level: ECLevel) -> &'static Template {
        &templates()[*version - 1][ec_level as usize]
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn ec_len(&self) -> usize {
        self.ec_len
    }

    pub fn block_lens(&self) -> &[usize] {
        &self.block_lens
    }

    pub fn block_count(&self) -> usize {
        self.block_lens.len()
    }

    pub fn total_codewords(&self) -> usize {
        self.data_len + self.ec_len * self.block_count()
    }

    fn build(version: Version, ec_level: ECLevel) -> Self {
        let row = &CODEWORDS[*version - 1];
        let col = 1 + 2 * ec_level as usize;
        let (ec_total, block_count) = (row[col], row[col + 1]);
        let data_len = row[0] - ec_total;
        Self {
            version,
            data_len,
            ec_len: ec_total / block_count,
            block_lens: partition(data_len, block_count),
        }
    }
}

// Splits `len` codewords over `count` blocks as evenly as possible
fn partition(len: usize, count: usize) -> Vec<usize> {
    let mut rem = len;
    (0..count)
        .rev()
        .map(|done| {
            let block = rem / (done + 1);
            rem -= block;
            block
        })
        .collect()
}

fn templates() -> &'static [[Template; 4]] {
    static TEMPLATES: OnceLock<Vec<[Template; 4]>> = OnceLock::new();
    TEMPLATES.get_or_init(|| {
        Version::all()
            .map(|v| std::array::from_fn(|i| Template::build(v, ECLevel::ALL[i])))
            .collect()
    })
}

#[cfg(test)]
mod template_tests {
    use test_case::test_case;

    use super::{partition, Template, CODEWORDS};
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_partition() {
        assert_eq!(partition(19, 1), vec![19]);
        assert_eq!(partition(62, 4), vec![15, 15, 16, 16]);
        assert_eq!(partition(15, 2), vec![7, 8]);
        assert_eq!(partition(0, 3), vec![0, 0, 0]);
    }

    #[test_case(1, ECLevel::L, 19, 7, vec![19])]
    #[test_case(1, ECLevel::M, 16, 10, vec![16])]
    #[test_case(1, ECLevel::H, 9, 17, vec![9])]
    #[test_case(5, ECLevel::Q, 62, 18, vec![15, 15, 16, 16])]
    #[test_case(6, ECLevel::M, 108, 16, vec![27, 27, 27, 27])]
    #[test_case(40, ECLevel::L, 2956, 30, [vec![118; 19], vec![119; 6]].concat())]
    fn test_template(v: usize, ecl: ECLevel, data_len: usize, ec_len: usize, blocks: Vec<usize>) {
        let t = Template::get(Version::new(v).unwrap(), ecl);
        assert_eq!(*t.version(), v);
        assert_eq!(t.data_len(), data_len);
        assert_eq!(t.ec_len(), ec_len);
        assert_eq!(t.block_lens(), &blocks[..]);
    }

    #[test]
    fn test_all_templates_consistent() {
        for v in Version::all() {
            for ecl in ECLevel::ALL {
                let t = Template::get(v, ecl);
                let lens = t.block_lens();
                assert_eq!(lens.iter().sum::<usize>(), t.data_len(), "{v} {ecl}");
                assert!(lens.windows(2).all(|w| w[0] <= w[1] && w[1] - w[0] <= 1), "{v} {ecl}");
                assert_eq!(t.total_codewords(), CODEWORDS[*v - 1][0], "{v} {ecl}");
            }
        }
    }

    #[test]
    fn test_get_returns_shared_template() {
        let a = Template::get(Version::new(10).unwrap(), ECLevel::Q);
        let b = Template::get(Version::new(10).unwrap(), ECLevel::Q);
        assert!(std::ptr::eq(a, b));
    }
}

// Global constants
//------------------------------------------------------------------------------

// Per version: total codewords, then (ec codewords, block count) for L, M, Q, H
static CODEWORDS: [[usize; 9]; 40] = [
    [26, 7, 1, 10, 1, 13, 1, 17, 1],
    [44, 10, 1, 16, 1, 22, 1, 28, 1],
    [70, 15, 1, 26, 1, 36, 2, 44, 2],
    [100, 20, 1, 36, 2, 52, 2, 64, 4],
    [134, 26, 1, 48, 2, 72, 4, 88, 4],
    [172, 36, 2, 64, 4, 96, 4, 112, 4],
    [196, 40, 2, 72, 4, 108, 6, 130, 5],
    [242, 48, 2, 88, 4, 132, 6, 156, 6],
    [292, 60, 2, 110, 5, 160, 8, 192, 8],
    [346, 72, 4, 130, 5, 192, 8, 224, 8],
    [404, 80, 4, 150, 5, 224, 8, 264, 11],
    [466, 96, 4, 176, 8, 260, 10, 308, 11],
    [532, 104, 4, 198, 9, 288, 12, 352, 16],
    [581, 120, 4, 216, 9, 320, 16, 384, 16],
    [655, 132, 6, 240, 10, 360, 12, 432, 18],
    [733, 144, 6, 280, 10, 408, 17, 480, 16],
    [815, 168, 6, 308, 11, 448, 16, 532, 19],
    [901, 180, 6, 338, 13, 504, 18, 588, 21],
    [991, 196, 7, 364, 14, 546, 21, 650, 25],
    [1085, 224, 8, 416, 16, 600, 20, 700, 25],
    [1156, 224, 8, 442, 17, 644, 23, 750, 25],
    [1258, 252, 9, 476, 17, 690, 23, 816, 34],
    [1364, 270, 9, 504, 18, 750, 25, 900, 30],
    [1474, 300, 10, 560, 20, 810, 27, 960, 32],
    [1588, 312, 12, 588, 21, 870, 29, 1050, 35],
    [1706, 336, 12, 644, 23, 952, 34, 1110, 37],
    [1828, 360, 12, 700, 25, 1020, 34, 1200, 40],
    [1921, 390, 13, 728, 26, 1050, 35, 1260, 42],
    [2051, 420, 14, 784, 28, 1140, 38, 1350, 45],
    [2185, 450, 15, 812, 29, 1200, 40, 1440, 48],
    [2323, 480, 16, 868, 31, 1290, 43, 1530, 51],
    [2465, 510, 17, 924, 33, 1350, 45, 1620, 54],
    [2611, 540, 18, 980, 35, 1440, 48, 1710, 57],
    [2761, 570, 19, 1036, 37, 1530, 51, 1800, 60],
    [2876, 570, 19, 1064, 38, 1590, 53, 1890, 63],
    [3034, 600, 20, 1120, 40, 1680, 56, 1980, 66],
    [3196, 630, 21, 1204, 43, 1770, 59, 2100, 70],
    [3362, 660, 22, 1260, 45, 1860, 62, 2220, 74],
    [3532, 720, 24, 1316, 47, 1950, 65, 2310, 77],
    [3706, 750, 25, 1372, 49, 2040, 68, 2430, 81],
];
