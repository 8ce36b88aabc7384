mod block;
mod galois;

pub use block::*;

use galois::{exp, generator_polynomial, log};

// ECC: Error Correction Codeword generator
//------------------------------------------------------------------------------

/// Computes the `ec_len` Reed-Solomon codewords of `block`.
///
/// The block, shifted up by `ec_len` zero codewords, is divided by the
/// generator polynomial of degree `ec_len`; the remainder's coefficients are
/// the ecc. Zero leading coefficients are skipped without a division step.
pub fn ecc(block: &[u8], ec_len: usize) -> Vec<u8> {
    let len = block.len();
    let gen_poly = generator_polynomial(ec_len);

    let mut res = block.to_vec();
    res.resize(len + ec_len, 0);

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }

        let log_lead_coeff = log(lead_coeff) as usize;
        for (u, &v) in res[i + 1..].iter_mut().zip(gen_poly[1..].iter()) {
            *u ^= exp(v as usize + log_lead_coeff);
        }
    }

    res.split_off(len)
}
