//======================================================================
// src/backends/soft.rs
// Photon256 over the packed 32-byte state, one table lookup per byte.
//======================================================================

use crate::consts::{GF16_MUL, LS4B, M8, RC, ROUNDS, SBOX8, STATE_BYTES};

/// XORs the round constants into the first column, i.e. the low nibble of
/// every row's first cell.
#[inline(always)]
fn add_constant(state: &mut [u8; STATE_BYTES], round: usize) {
    let off = round * 8;

    for i in 0..8 {
        state[i * 4] ^= RC[off + i];
    }
}

/// Applies the 4-bit S-box to all 64 cells, two at a time.
#[inline(always)]
fn sub_cells(state: &mut [u8; STATE_BYTES]) {
    for byte in state.iter_mut() {
        *byte = SBOX8[*byte as usize];
    }
}

/// Rotates row i left by i cell positions. With eight nibbles packed
/// little-endian into a `u32`, that is a right rotation by `4 * i` bits
/// regardless of host byte order.
#[inline(always)]
fn shift_rows(state: &mut [u8; STATE_BYTES]) {
    for i in 0..8 {
        let off = i * 4;
        let row = u32::from_le_bytes(state[off..off + 4].try_into().unwrap());
        let rotated = row.rotate_right(i as u32 * 4);
        state[off..off + 4].copy_from_slice(&rotated.to_le_bytes());
    }
}

/// Multiplies the state matrix by M8 over GF(2^4), mixing each column
/// independently. Works on the 64-cell expansion and packs back.
#[inline(always)]
fn mix_column_serial(state: &mut [u8; STATE_BYTES]) {
    let mut cells = [0u8; 64];
    for i in 0..STATE_BYTES {
        cells[2 * i] = state[i] & LS4B;
        cells[2 * i + 1] = state[i] >> 4;
    }

    let mut mixed = [0u8; 64];
    for i in 0..8 {
        let off = i * 8;

        for k in 0..8 {
            let row_factor = M8[off + k] << 4;

            for j in 0..8 {
                mixed[off + j] ^= GF16_MUL[(row_factor | cells[k * 8 + j]) as usize];
            }
        }
    }

    for i in 0..STATE_BYTES {
        state[i] = (mixed[2 * i + 1] << 4) | mixed[2 * i];
    }
}

/// The Photon256 permutation: 12 rounds of AddConstant, SubCells, ShiftRows
/// and MixColumnSerial, in place.
pub(crate) fn photon256(state: &mut [u8; STATE_BYTES]) {
    for round in 0..ROUNDS {
        add_constant(state, round);
        sub_cells(state);
        shift_rows(state);
        mix_column_serial(state);
    }
}
