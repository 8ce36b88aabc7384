mod code;
mod qr;

pub use code::QRCode;
pub(crate) use qr::QR;
#[cfg(test)]
pub(crate) use qr::Module;

use log::debug;

use crate::common::{
    codec::{encode_bytes, encode_text, Band},
    ec::SymbolData,
    error::QRResult,
    mask::apply_best_mask,
    metadata::ECLevel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Message<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

/// Configures and builds a [`QRCode`]. The version and mask are always
/// chosen automatically.
///
/// ```
/// use qrcraft::{ECLevel, QRBuilder};
///
/// let code = QRBuilder::new("http://www.juit.com/en/dishes")
///     .ec_level(ECLevel::Q)
///     .url(true)
///     .build()
///     .unwrap();
/// assert_eq!(code.size(), *code.version() * 4 + 17);
/// ```
#[derive(Debug, Clone)]
pub struct QRBuilder<'a> {
    data: Message<'a>,
    ec_level: ECLevel,
    url: bool,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { data: Message::Text(text), ec_level: ECLevel::M, url: false }
    }

    /// Raw bytes always go in byte mode and are never treated as a url.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self { data: Message::Bytes(data), ec_level: ECLevel::M, url: false }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.data = Message::Text(text);
        self
    }

    pub fn bytes(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = Message::Bytes(data);
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    // Splits http and https links so the scheme and host are alphanumeric
    pub fn url(&mut self, url: bool) -> &mut Self {
        self.url = url;
        self
    }

    pub fn metadata(&self) -> String {
        let (kind, len) = match self.data {
            Message::Text(t) => ("Text", t.len()),
            Message::Bytes(b) => ("Bytes", b.len()),
        };
        format!("{{ {kind}: {len} bytes, Ec level: {:?}, Url: {} }}", self.ec_level, self.url)
    }
}

#[cfg(test)]
mod qrbuilder_util_tests {
    use super::QRBuilder;
    use crate::common::metadata::ECLevel;

    #[test]
    fn test_metadata() {
        let mut qr_builder = QRBuilder::new("Hello, world!");
        assert_eq!(qr_builder.metadata(), "{ Text: 13 bytes, Ec level: M, Url: false }");
        qr_builder.ec_level(ECLevel::H).url(true);
        assert_eq!(qr_builder.metadata(), "{ Text: 13 bytes, Ec level: H, Url: true }");
        qr_builder.bytes(&[1, 2, 3]);
        assert_eq!(qr_builder.metadata(), "{ Bytes: 3 bytes, Ec level: H, Url: true }");
    }
}

impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QRCode> {
        debug!("Generating QR {}", self.metadata());

        let msg = match self.data {
            Message::Text(t) => encode_text(t, self.url)?,
            Message::Bytes(b) => encode_bytes(b)?,
        };

        debug!("Finding smallest template...");
        let template = msg.find_template(self.ec_level)?;
        let version = template.version();
        let bit_len = msg.get(Band::of(version)).map_or(0, |b| b.len());
        debug!(
            "Selected version {version}: {bit_len} bits into {} data codewords",
            template.data_len()
        );

        debug!("Constructing payload with ecc & interleaving...");
        let codewords = msg.codewords(template);
        let payload = SymbolData::new(&codewords, template).payload();

        debug!("Constructing QR...");
        let mut qr = QR::new(version, self.ec_level);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(&payload);

        debug!("Finding & applying best mask...");
        let mask = apply_best_mask(&mut qr);

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        debug!(
            "QR generated: version {version}, mask {mask}, dark cells {dark_modules} of {total_modules}"
        );

        Ok(QRCode::new(&qr, mask))
    }
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::QRBuilder;
    use crate::common::error::QRError;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::ECLevel;

    #[test_case("foo", ECLevel::M, false, 1, 2)]
    #[test_case("1234567890", ECLevel::M, false, 1, 2)]
    #[test_case("HELLO WORLD", ECLevel::M, false, 1, 0)]
    #[test_case("Hello, world!", ECLevel::M, false, 1, 2)]
    #[test_case("http://www.juit.com/", ECLevel::M, true, 1, 2)]
    #[test_case("http://www.juit.com/en/dishes", ECLevel::M, true, 2, 1)]
    #[test_case("HELLO WORLD", ECLevel::H, false, 2, 5)]
    #[test_case("Hello, world!", ECLevel::Q, false, 2, 4)]
    fn test_builder(data: &str, ecl: ECLevel, url: bool, version: usize, mask: u8) {
        let code = QRBuilder::new(data).ec_level(ecl).url(url).build().unwrap();
        assert_eq!(*code.version(), version);
        assert_eq!(code.ec_level(), ecl);
        assert_eq!(code.mask(), MaskPattern::new(mask));
        assert_eq!(code.size(), version * 4 + 17);
    }

    #[test]
    fn test_builder_bytes_skip_url_split() {
        let url = "http://www.juit.com/en/dishes";
        let text = QRBuilder::new(url).build().unwrap();
        let bytes = QRBuilder::from_bytes(url.as_bytes()).url(true).build().unwrap();
        assert_eq!(text, bytes);
    }

    #[test]
    fn test_builder_empty_text() {
        let code = QRBuilder::new("").build().unwrap();
        assert_eq!(*code.version(), 1);
    }

    #[test]
    fn test_builder_data_overflow() {
        let data = "1234567890".repeat(306);
        let err = QRBuilder::new(&data).ec_level(ECLevel::H).build().unwrap_err();
        assert!(matches!(err, QRError::CapacityOverflow { ec_level: ECLevel::H, .. }));
        let err = QRBuilder::new(&"1".repeat(7090)).ec_level(ECLevel::L).build().unwrap_err();
        assert!(matches!(err, QRError::DataTooLong { max: 7089, .. }));
    }
}
