//! # qrcraft
//!
//! A Rust library for generating ISO/IEC 18004 QR code symbols with
//! Reed-Solomon error correction and penalty-scored masking.
//!
//! The output is a square boolean matrix (`true` = dark) with the origin at
//! the top-left module. Rasterizing or tracing it is left to the caller.
//!
//! ## Features
//!
//! - **Automatic mode selection**: numeric, alphanumeric or byte mode, whichever is narrowest
//! - **URL optimization**: the scheme and host of http(s) links are upper-cased into alphanumeric mode
//! - **Smallest version**: versions 1-40 are searched per character count band
//! - **Reed-Solomon error correction**: levels L, M, Q and H
//! - **Mask selection**: all eight masks are scored with the standard penalty rules
//!
//! ## Quick Start
//!
//! ```rust
//! use qrcraft::{generate, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = generate("Hello, World!", ECLevel::M, false)?;
//! assert_eq!(code.size(), 21);
//!
//! for row in code.rows() {
//!     let line: String = row.iter().map(|&dark| if dark { '#' } else { ' ' }).collect();
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrcraft::{ECLevel, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ec_level: ECLevel = "q".parse()?;
//! let code = QRBuilder::new("https://example.com/menu/today")
//!     .ec_level(ec_level)  // Defaults to ECLevel::M
//!     .url(true)           // Defaults to false
//!     .build()?;
//!
//! let matrix = code.to_matrix();
//! assert_eq!(matrix.len(), code.size());
//! # Ok(())
//! # }
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use qrcraft::{generate, ECLevel};
//!
//! let err = generate(&"1".repeat(7090), ECLevel::L, false).unwrap_err();
//! assert!(err.is_overflow());
//! ```
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{QRBuilder, QRCode};
pub use common::codec::Mode;
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{ECLevel, Version};

/// Encodes `message` into the smallest symbol able to hold it at `ec_level`.
/// With `url` set, http and https links are split so their scheme and host
/// encode alphanumerically.
pub fn generate(message: &str, ec_level: ECLevel, url: bool) -> QRResult<QRCode> {
    QRBuilder::new(message).ec_level(ec_level).url(url).build()
}

/// Encodes `data` in byte mode into the smallest symbol able to hold it.
pub fn generate_bytes(data: &[u8], ec_level: ECLevel) -> QRResult<QRCode> {
    QRBuilder::from_bytes(data).ec_level(ec_level).build()
}
