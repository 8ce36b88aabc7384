use log::debug;

use super::types::{Band, Mode};
use crate::common::bitstream::BitStream;
use crate::common::error::{QRError, QRResult};
use crate::common::metadata::ECLevel;
use crate::common::version_db::Template;

// Encoded message
//------------------------------------------------------------------------------

/// A message rendered once per version band. A band is `None` when the char
/// count of some segment does not fit that band's count indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    bands: [Option<BitStream>; 3],
}

impl EncodedMessage {
    pub fn get(&self, band: Band) -> Option<&BitStream> {
        self.bands[band as usize].as_ref()
    }

    // Joins two segments band by band. A band survives only if both sides carry it.
    fn concat(self, other: Self) -> Self {
        let [a1, a10, a27] = self.bands;
        let [b1, b10, b27] = other.bands;
        let join = |a: Option<BitStream>, b: Option<BitStream>| match (a, b) {
            (Some(mut a), Some(b)) => {
                a.extend(&b);
                Some(a)
            }
            _ => None,
        };
        Self { bands: [join(a1, b1), join(a10, b10), join(a27, b27)] }
    }

    /// Smallest template whose data capacity holds the band encoding that
    /// applies to it.
    pub fn find_template(&self, ec_level: ECLevel) -> QRResult<&'static Template> {
        for band in Band::ALL {
            let Some(bits) = self.get(band) else { continue };
            let len = bits.codeword_len();
            if let Some(template) =
                band.versions().map(|v| Template::get(v, ec_level)).find(|t| t.data_len() >= len)
            {
                return Ok(template);
            }
        }
        let codewords = self.bands.iter().flatten().last().map_or(0, BitStream::codeword_len);
        Err(QRError::CapacityOverflow { ec_level, codewords })
    }

    /// Data codewords for `template`: the band bits, an implicit zero
    /// terminator, then alternating pad codewords.
    pub fn codewords(&self, template: &Template) -> Vec<u8> {
        let band = Band::of(template.version());
        let Some(bits) = self.get(band) else {
            panic!("Message has no encoding for version {}", template.version());
        };
        let data_len = template.data_len();
        assert!(
            bits.codeword_len() <= data_len,
            "Message of {} codewords exceeds capacity {data_len}",
            bits.codeword_len()
        );

        let mut res = bits.data().to_vec();
        res.resize(data_len, 0);
        let pad_start = (bits.len() + 4).div_ceil(8);
        for (i, cw) in res.iter_mut().enumerate().skip(pad_start) {
            *cw = PADDING_CODEWORDS[(i - pad_start) & 1];
        }
        res
    }
}

// Encoder
//------------------------------------------------------------------------------

/// Encodes a text message. With `url` set, http and https links are split so
/// the scheme and host can go into alphanumeric mode.
pub fn encode_text(text: &str, url: bool) -> QRResult<EncodedMessage> {
    let data = text.as_bytes();
    let mode = Mode::classify(data);
    if mode == Mode::Byte && url && is_url(text) {
        return encode_url(text);
    }
    debug!("Encoding {} bytes of text in {mode:?} mode", data.len());
    encode_segment(mode, data)
}

/// Encodes raw bytes in byte mode.
pub fn encode_bytes(data: &[u8]) -> QRResult<EncodedMessage> {
    debug!("Encoding {} raw bytes", data.len());
    encode_segment(Mode::Byte, data)
}

fn is_url(text: &str) -> bool {
    let lower = |n: usize| text.get(..n).map(str::to_ascii_lowercase);
    lower(5).as_deref() == Some("http:") || lower(6).as_deref() == Some("https:")
}

// Head runs up to and including the first slash from byte 8 on, past the
// scheme and its double slash
fn split_url(text: &str) -> (&str, &str) {
    let at = text
        .bytes()
        .enumerate()
        .skip(8)
        .find(|&(_, b)| b == b'/')
        .map_or(text.len(), |(i, _)| i + 1);
    text.split_at(at)
}

fn encode_url(text: &str) -> QRResult<EncodedMessage> {
    let (head, tail) = split_url(text);
    debug!("Splitting url into head of {} and tail of {} bytes", head.len(), tail.len());
    let head = encode_text(&head.to_uppercase(), false)?;
    if tail.is_empty() {
        return Ok(head);
    }
    let tail = encode_text(tail, false)?;
    Ok(head.concat(tail))
}

fn encode_segment(mode: Mode, data: &[u8]) -> QRResult<EncodedMessage> {
    let len = data.len();
    let max = mode.max_len();
    if len > max {
        return Err(QRError::DataTooLong { mode, len, max });
    }

    let mut payload = BitStream::with_capacity(mode.encoded_len(len));
    for chunk in data.chunks(mode.chunk_size()) {
        payload.push_bits(mode.encode_chunk(chunk), mode.encoded_len(chunk.len()));
    }

    let bands = Band::ALL.map(|band| {
        let cnt_bits = mode.char_cnt_bits(band);
        if len >> cnt_bits != 0 {
            return None;
        }
        let mut bs = BitStream::with_capacity(4 + cnt_bits + payload.len());
        bs.push_bits(mode as u16, 4);
        bs.push_bits(len as u16, cnt_bits);
        bs.extend(&payload);
        Some(bs)
    });
    Ok(EncodedMessage { bands })
}


// Global constants
//------------------------------------------------------------------------------

static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
