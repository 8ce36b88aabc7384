use std::sync::OnceLock;

// Galois field GF(256) arithmetic in log form
//------------------------------------------------------------------------------

#[inline]
pub fn exp(power: usize) -> u8 {
    EXP_TABLE[power % 255]
}

#[inline]
pub fn log(n: u8) -> u8 {
    debug_assert!(n != 0, "Log of zero is undefined");
    LOG_TABLE[n as usize]
}

// Generator polynomial of degree `ec_len` as logs of its coefficients, highest
// term first
pub fn generator_polynomial(ec_len: usize) -> &'static [u8] {
    assert!(ec_len <= MAX_EC_LEN, "Unsupported ecc length: {ec_len}");
    &generator_polynomials()[ec_len]
}

// Each polynomial multiplies the previous one by (x - a^(n-1))
fn generator_polynomials() -> &'static [Vec<u8>] {
    static POLYNOMIALS: OnceLock<Vec<Vec<u8>>> = OnceLock::new();
    POLYNOMIALS.get_or_init(|| {
        let mut polys: Vec<Vec<u8>> = Vec::with_capacity(MAX_EC_LEN + 1);
        polys.push(vec![0]);
        for n in 1..=MAX_EC_LEN {
            let prev = &polys[n - 1];
            let mut poly = Vec::with_capacity(n + 1);
            poly.push(prev[0]);
            for i in 1..=n {
                let hi = if i < n { exp(prev[i] as usize) } else { 0 };
                let lo = exp(prev[i - 1] as usize + n - 1);
                poly.push(log(hi ^ lo));
            }
            polys.push(poly);
        }
        polys
    })
}

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0; 256];
    let mut n: u16 = 1;
    let mut i = 0;
    while i < 256 {
        table[i] = n as u8;
        n <<= 1;
        if n > 255 {
            n ^= PRIMITIVE_POLYNOMIAL;
        }
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}


// Global constants
//------------------------------------------------------------------------------

// x^8 + x^4 + x^3 + x^2 + 1
const PRIMITIVE_POLYNOMIAL: u16 = 285;

pub const MAX_EC_LEN: usize = 254;

static EXP_TABLE: [u8; 256] = build_exp_table();

static LOG_TABLE: [u8; 256] = build_log_table();
