use thiserror::Error;

use super::{codec::Mode, metadata::ECLevel};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Encoding overflow
    #[error("Data too long: {len} exceeds the {mode:?} mode limit of {max}")]
    DataTooLong { mode: Mode, len: usize, max: usize },
    #[error("Capacity overflow: {codewords} codewords do not fit any version at ec level {ec_level:?}")]
    CapacityOverflow { ec_level: ECLevel, codewords: usize },

    // Configuration
    #[error("Invalid version")]
    InvalidVersion,
    #[error("Invalid error correction level")]
    InvalidECLevel,
    #[error("Invalid masking pattern")]
    InvalidMaskingPattern,
}

impl QRError {
    /// True when the message cannot be represented in any QR symbol, either
    /// because its mode ceiling is exceeded or because no version is large
    /// enough.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::DataTooLong { .. } | Self::CapacityOverflow { .. })
    }
}

pub type QRResult<T> = Result<T, QRError>;

#[cfg(test)]
mod error_tests {
    use super::QRError;
    use crate::common::{codec::Mode, metadata::ECLevel};

    #[test]
    fn test_display() {
        let err = QRError::DataTooLong { mode: Mode::Numeric, len: 7090, max: 7089 };
        assert_eq!(err.to_string(), "Data too long: 7090 exceeds the Numeric mode limit of 7089");
        let err = QRError::CapacityOverflow { ec_level: ECLevel::H, codewords: 1300 };
        assert_eq!(
            err.to_string(),
            "Capacity overflow: 1300 codewords do not fit any version at ec level H"
        );
    }

    #[test]
    fn test_is_overflow() {
        assert!(QRError::DataTooLong { mode: Mode::Byte, len: 2954, max: 2953 }.is_overflow());
        assert!(QRError::CapacityOverflow { ec_level: ECLevel::L, codewords: 3000 }.is_overflow());
        assert!(!QRError::InvalidECLevel.is_overflow());
    }
}
