use std::fmt::{Display, Formatter};

// Bit stream
//------------------------------------------------------------------------------

/// Growable MSB-first bit buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
}

impl BitStream {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity(bit_capacity.div_ceil(8)), len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Length in whole codewords, counting a partial trailing byte
    pub fn codeword_len(&self) -> usize {
        self.len.div_ceil(8)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b1000_0000 >> offset;
        }
        self.len += 1;
    }

    // Pushes the lowest `size` bits of `bits`, most significant first
    pub fn push_bits(&mut self, bits: u16, size: usize) {
        debug_assert!(size <= 16, "Bit count exceeds 16: {size}");
        debug_assert!(
            size >= (16 - bits.leading_zeros()) as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );

        for i in (0..size).rev() {
            self.push((bits >> i) & 1 == 1);
        }
    }

    pub fn extend(&mut self, other: &BitStream) {
        if self.len & 7 == 0 {
            self.data.extend_from_slice(&other.data);
            self.len += other.len;
            return;
        }
        for bit in other.iter() {
            self.push(bit);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| (self.data[i >> 3] >> (7 - (i & 7))) & 1 == 1)
    }
}

impl Display for BitStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let bits = self.iter().map(|b| if b { '1' } else { '0' }).collect::<String>();
        f.write_str(&bits)
    }
}

#[cfg(test)]
mod bit_stream_tests {

    use super::BitStream;

    #[test]
    fn test_len() {
        let mut bs = BitStream::new();
        assert_eq!(bs.len(), 0);
        assert!(bs.is_empty());
        bs.push_bits(0, 0);
        assert_eq!(bs.len(), 0);
        bs.push_bits(0b1000, 4);
        assert_eq!(bs.len(), 4);
        bs.push_bits(0b1000, 8);
        assert_eq!(bs.len(), 12);
        bs.push_bits(0b1000, 4);
        assert_eq!(bs.len(), 16);
        bs.push_bits(0b1111111, 7);
        assert_eq!(bs.len(), 23);
        assert_eq!(bs.codeword_len(), 3);
    }

    #[test]
    fn test_push() {
        let mut bs = BitStream::new();
        bs.push(false);
        assert_eq!(bs.data(), &[0b00000000]);
        bs.push(true);
        assert_eq!(bs.data(), &[0b01000000]);
    }

    #[test]
    fn test_push_bits() {
        let mut bs = BitStream::new();
        bs.push_bits(0b0001, 4);
        bs.push_bits(1023, 10);
        bs.push_bits(0xabcd, 16);
        assert_eq!(bs.to_string(), "000111111111111010101111001101");
        assert_eq!(bs.data(), &[0b00011111, 0b11111110, 0b10101111, 0b00110100]);
    }

    #[test]
    fn test_extend_aligned() {
        let mut a = BitStream::new();
        a.push_bits(0xff, 8);
        let mut b = BitStream::new();
        b.push_bits(0b101, 3);
        a.extend(&b);
        assert_eq!(a.to_string(), "11111111101");
    }

    #[test]
    fn test_extend_unaligned() {
        let mut a = BitStream::new();
        a.push_bits(0b01, 2);
        let mut b = BitStream::new();
        b.push_bits(0b1100_1010_1, 9);
        a.extend(&b);
        assert_eq!(a.len(), 11);
        assert_eq!(a.to_string(), "01110010101");
    }
}
