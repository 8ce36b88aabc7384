use std::ops::Deref;

use super::ecc;
use crate::common::version_db::Template;

// Block
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Block {
    data: Vec<u8>,
    ecc: Vec<u8>,
}

impl Block {
    pub fn new(data: &[u8], ec_len: usize) -> Self {
        Self { data: data.to_vec(), ecc: ecc(data, ec_len) }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn ecc(&self) -> &[u8] {
        &self.ecc
    }
}

// Symbol data: data codewords split into blocks, each with its ecc
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SymbolData {
    blocks: Vec<Block>,
}

impl SymbolData {
    pub fn new(codewords: &[u8], template: &Template) -> Self {
        assert_eq!(
            codewords.len(),
            template.data_len(),
            "Codeword count doesn't match template: Codewords {}, Template {}",
            codewords.len(),
            template.data_len()
        );

        let mut offset = 0;
        let blocks = template
            .block_lens()
            .iter()
            .map(|&len| {
                let block = Block::new(&codewords[offset..offset + len], template.ec_len());
                offset += len;
                block
            })
            .collect();

        Self { blocks }
    }

    pub fn data_blocks(&self) -> Vec<&[u8]> {
        self.blocks.iter().map(Block::data).collect()
    }

    pub fn ecc_blocks(&self) -> Vec<&[u8]> {
        self.blocks.iter().map(Block::ecc).collect()
    }

    // Interleaved data codewords followed by interleaved ecc codewords
    pub fn payload(&self) -> Vec<u8> {
        let mut res = interleave(&self.data_blocks());
        res.extend(interleave(&self.ecc_blocks()));
        res
    }
}

// Takes the i-th codeword of every block in turn, skipping exhausted blocks
pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}

#[cfg(test)]
mod block_tests {
    use super::{interleave, SymbolData};
    use crate::common::metadata::{ECLevel, Version};
    use crate::common::version_db::Template;

    #[test]
    fn test_interleave() {
        let blocks = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9, 0]];
        let interleaved = interleave(&blocks);
        let exp_interleaved = vec![1, 4, 7, 2, 5, 8, 3, 6, 9, 0];
        assert_eq!(interleaved, exp_interleaved);
    }

    #[test]
    fn test_interleave_empty() {
        let blocks: Vec<Vec<u8>> = vec![];
        assert!(interleave(&blocks).is_empty());
    }

    #[test]
    fn test_symbol_data_simple() {
        let msg = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let template = Template::get(Version::new(1).unwrap(), ECLevel::M);
        let sd = SymbolData::new(msg, template);
        assert_eq!(sd.data_blocks(), vec![&msg[..]]);
        assert_eq!(sd.ecc_blocks(), vec![&b"\xc4\x23\x27\x77\xeb\xd7\xe7\xe2\x5d\x17"[..]]);
    }

    #[test]
    fn test_symbol_data_complex() {
        let msg = b"CUF\x86W&U\xc2w2\x06\x12\x06g&\xf6\xf6B\x07v\x86\xf2\x07&V\x16\xc6\xc7\x92\x06\
                    \xb6\xe6\xf7w2\x07v\x86W&R\x06\x86\x972\x07F\xf7vV\xc2\x06\x972\x10\xec\x11\xec\
                    \x11\xec\x11\xec";
        let expected_ec = [
            b"\xd5\xc7\x0b\x2d\x73\xf7\xf1\xdf\xe5\xf8\x9a\x75\x9a\x6f\x56\xa1\x6f\x27",
            b"\x57\xcc\x60\x3c\xca\xb6\x7c\x9d\xc8\x86\x1b\x81\xd1\x11\xa3\xa3\x78\x85",
            b"\x94\x74\xb1\xd4\x4c\x85\x4b\xf2\xee\x4c\xc3\xe6\xbd\x0a\x6c\xf0\xc0\x8d",
            b"\xeb\x9f\x05\xad\x18\x93\x3b\x21\x6a\x28\xff\xac\x52\x02\x83\x20\xb2\xec",
        ];
        let template = Template::get(Version::new(5).unwrap(), ECLevel::Q);
        let sd = SymbolData::new(msg, template);
        let lens = sd.data_blocks().iter().map(|b| b.len()).collect::<Vec<_>>();
        assert_eq!(lens, vec![15, 15, 16, 16]);
        assert_eq!(sd.data_blocks()[1], &msg[15..30]);
        let ecc = sd.ecc_blocks();
        assert_eq!(ecc.len(), expected_ec.len());
        for (got, exp) in ecc.iter().zip(expected_ec.iter()) {
            assert_eq!(got, &&exp[..]);
        }
    }

    #[test]
    fn test_payload_len() {
        for v in Version::all() {
            for ecl in ECLevel::ALL {
                let template = Template::get(v, ecl);
                let sd = SymbolData::new(&vec![0; template.data_len()], template);
                assert_eq!(sd.payload().len(), v.total_codewords(), "{v} {ecl}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_codeword_count_mismatch() {
        let template = Template::get(Version::new(1).unwrap(), ECLevel::L);
        SymbolData::new(&[0; 18], template);
    }
}
