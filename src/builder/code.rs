use super::QR;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{Color, ECLevel, Version};

// Finished symbol
//------------------------------------------------------------------------------

/// A finished, masked QR symbol. The matrix is square, row-major with the
/// origin at the top-left module, and `true` marks a dark module. The quiet
/// zone is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QRCode {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    size: usize,
    modules: Vec<bool>,
}

impl QRCode {
    pub(crate) fn new(qr: &QR, mask: MaskPattern) -> Self {
        let modules = qr.grid().iter().map(|m| **m == Color::Dark).collect();
        Self { version: qr.version(), ec_level: qr.ec_level(), mask, size: qr.width(), modules }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Modules per side, `4 * version + 17`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`QRCode::size`].
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        assert!(row < self.size && col < self.size, "Module ({row}, {col}) out of bounds");
        self.modules[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.modules.chunks_exact(self.size)
    }

    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }
}

#[cfg(test)]
mod qrcode_tests {
    use super::{QRCode, QR};
    use crate::builder::Module;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{Color, ECLevel, Version};

    fn sample() -> QRCode {
        let mut qr = QR::new(Version::MIN, ECLevel::Q);
        qr.set(0, 1, Module::Func(Color::Dark));
        qr.set(-1, 0, Module::Data(Color::Dark));
        qr.set(2, 2, Module::Data(Color::Light));
        QRCode::new(&qr, MaskPattern::new(3))
    }

    #[test]
    fn test_accessors() {
        let code = sample();
        assert_eq!(code.version(), Version::MIN);
        assert_eq!(code.ec_level(), ECLevel::Q);
        assert_eq!(code.mask(), MaskPattern::new(3));
        assert_eq!(code.size(), 21);
        assert_eq!(code.count_dark_modules(), 2);
    }

    #[test]
    fn test_orientation() {
        let code = sample();
        assert!(code.is_dark(0, 1));
        assert!(!code.is_dark(1, 0));
        assert!(code.is_dark(20, 0));
        let matrix = code.to_matrix();
        assert_eq!(matrix.len(), 21);
        assert!(matrix.iter().all(|row| row.len() == 21));
        assert!(matrix[0][1] && matrix[20][0]);
        assert_eq!(code.rows().count(), 21);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_is_dark_out_of_bounds() {
        sample().is_dark(21, 0);
    }
}
