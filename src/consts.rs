//======================================================================
// src/consts.rs
// Sizes, domain parameters and the precomputed Photon256 tables.
//======================================================================

/// Secret key size in bytes.
pub const KEY_BYTES: usize = 16;

/// Public message nonce size in bytes.
pub const NONCE_BYTES: usize = 16;

/// Authentication tag size in bytes.
pub const TAG_BYTES: usize = 16;

/// Hash digest size in bytes.
pub const DIGEST_BYTES: usize = 32;

/// The packed permutation state: 64 4-bit cells in 32 bytes.
pub const STATE_BYTES: usize = 32;

/// Rate of PHOTON-Beetle-AEAD[32], in bytes.
pub const AEAD32_RATE: usize = 4;

/// Rate of PHOTON-Beetle-AEAD[128], in bytes.
pub const AEAD128_RATE: usize = 16;

/// Rate of PHOTON-Beetle-Hash after the first block, in bytes.
pub const HASH_RATE: usize = 4;

/// The hash absorbs its first block at this wider rate.
pub const HASH_INITIAL_RATE: usize = 16;

/// Photon256 round count.
pub(crate) const ROUNDS: usize = 12;

/// Mask selecting the least significant nibble of a byte.
pub(crate) const LS4B: u8 = 0x0f;

// Irreducible polynomial x^4 + x + 1 for GF(2^4) cell arithmetic. Only the
// low four bits are kept; the multiplier masks its result the same way.
const IRP: u8 = 0b0001_0011 & LS4B;

pub(crate) const fn check_rate(rate: usize) -> bool {
    rate == AEAD32_RATE || rate == AEAD128_RATE
}

pub(crate) const fn check_out(out: usize) -> bool {
    out == TAG_BYTES || out == DIGEST_BYTES
}

/// The 4-bit S-box of Photon256.
pub(crate) const SBOX4: [u8; 16] = [
    0xc, 0x5, 0x6, 0xb, 0x9, 0x0, 0xa, 0xd, 0x3, 0xe, 0xf, 0x8, 0x4, 0x7, 0x1, 0x2,
];

/// Round constants, eight nibbles per round.
#[rustfmt::skip]
pub(crate) const RC: [u8; 96] = [
     1,  0,  2,  6, 14, 15, 13,  9,
     3,  2,  0,  4, 12, 13, 15, 11,
     7,  6,  4,  0,  8,  9, 11, 15,
    14, 15, 13,  9,  1,  0,  2,  6,
    13, 12, 14, 10,  2,  3,  1,  5,
    11, 10,  8, 12,  4,  5,  7,  3,
     6,  7,  5,  1,  9,  8, 10, 14,
    12, 13, 15, 11,  3,  2,  0,  4,
     9,  8, 10, 14,  6,  7,  5,  1,
     2,  3,  1,  5, 13, 12, 14, 10,
     5,  4,  6,  2, 10, 11,  9, 13,
    10, 11,  9, 13,  5,  4,  6,  2,
];

/// Multiplication in GF(2^4) modulo x^4 + x + 1.
pub(crate) const fn gf16_mul(a: u8, b: u8) -> u8 {
    let mut x = a;
    let mut res = 0u8;

    let mut i = 0;
    while i < 4 {
        if (b >> i) & 1 == 1 {
            res ^= x;
        }

        let overflow = (x >> 3) & 1 == 1;
        x <<= 1;
        if overflow {
            x ^= IRP;
        }

        i += 1;
    }

    res & LS4B
}

const fn compute_sbox8() -> [u8; 256] {
    let mut res = [0u8; 256];

    let mut i = 0;
    while i < 16 {
        let mut j = 0;
        while j < 16 {
            res[i * 16 + j] = (SBOX4[i] << 4) | SBOX4[j];
            j += 1;
        }
        i += 1;
    }

    res
}

const fn compute_gf16_mul_table() -> [u8; 256] {
    let mut res = [0u8; 256];

    let mut i = 0;
    while i < 16 {
        let mut j = 0;
        while j < 16 {
            res[i * 16 + j] = gf16_mul(i as u8, j as u8);
            j += 1;
        }
        i += 1;
    }

    res
}

/// 8-bit S-box applying [`SBOX4`] to both nibbles of a byte at once.
pub(crate) const SBOX8: [u8; 256] = compute_sbox8();

/// GF(2^4) multiplication table; the product of a and b lives at `a * 16 + b`.
pub(crate) const GF16_MUL: [u8; 256] = compute_gf16_mul_table();

/// Squares an 8x8 matrix over GF(2^4).
const fn gf16_matrix_square(mat: [u8; 64]) -> [u8; 64] {
    let mut res = [0u8; 64];

    let mut i = 0;
    while i < 8 {
        let mut k = 0;
        while k < 8 {
            let mut j = 0;
            while j < 8 {
                let idx = ((mat[i * 8 + k] << 4) | (mat[k * 8 + j] & LS4B)) as usize;
                res[i * 8 + j] ^= GF16_MUL[idx];
                j += 1;
            }
            k += 1;
        }
        i += 1;
    }

    res
}

const fn compute_m8() -> [u8; 64] {
    // Companion form of Serial[2, 4, 2, 11, 2, 8, 5, 6]: every row but the
    // last shifts the column vector up by one; the last row holds the
    // multipliers.
    #[rustfmt::skip]
    let serial: [u8; 64] = [
        0, 1, 0,  0, 0, 0, 0, 0,
        0, 0, 1,  0, 0, 0, 0, 0,
        0, 0, 0,  1, 0, 0, 0, 0,
        0, 0, 0,  0, 1, 0, 0, 0,
        0, 0, 0,  0, 0, 1, 0, 0,
        0, 0, 0,  0, 0, 0, 1, 0,
        0, 0, 0,  0, 0, 0, 0, 1,
        2, 4, 2, 11, 2, 8, 5, 6,
    ];

    let m2 = gf16_matrix_square(serial);
    let m4 = gf16_matrix_square(m2);
    gf16_matrix_square(m4)
}

/// Eighth power of the serial mixing matrix. Using it collapses the eight
/// successive serial mixings of MixColumnSerial into one matrix multiply
/// with bitwise-identical output.
pub(crate) const M8: [u8; 64] = compute_m8();
