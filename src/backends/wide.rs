//======================================================================
// src/backends/wide.rs
// Photon256 over the 64-cell one-nibble-per-byte expansion. Same packed
// interface and identical output as the soft backend; the expansion makes
// cell addressing direct at the cost of twice the working memory.
//======================================================================

use crate::consts::{GF16_MUL, LS4B, M8, RC, ROUNDS, SBOX4, STATE_BYTES};

#[inline(always)]
fn expand(state: &[u8; STATE_BYTES]) -> [u8; 64] {
    let mut cells = [0u8; 64];
    for i in 0..STATE_BYTES {
        cells[2 * i] = state[i] & LS4B;
        cells[2 * i + 1] = state[i] >> 4;
    }
    cells
}

#[inline(always)]
fn pack(cells: &[u8; 64], state: &mut [u8; STATE_BYTES]) {
    for i in 0..STATE_BYTES {
        state[i] = (cells[2 * i + 1] << 4) | cells[2 * i];
    }
}

#[inline(always)]
fn add_constant(cells: &mut [u8; 64], round: usize) {
    let off = round * 8;

    for i in 0..8 {
        cells[i * 8] ^= RC[off + i];
    }
}

#[inline(always)]
fn sub_cells(cells: &mut [u8; 64]) {
    for cell in cells.iter_mut() {
        *cell = SBOX4[*cell as usize];
    }
}

#[inline(always)]
fn shift_rows(cells: &mut [u8; 64]) {
    for i in 0..8 {
        let off = i * 8;
        let mut row = [0u8; 8];

        for j in 0..8 {
            row[j] = cells[off + (j + i) % 8];
        }

        cells[off..off + 8].copy_from_slice(&row);
    }
}

#[inline(always)]
fn mix_column_serial(cells: &mut [u8; 64]) {
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

    *cells = mixed;
}

/// The Photon256 permutation on the expanded state encoding.
pub(crate) fn photon256(state: &mut [u8; STATE_BYTES]) {
    let mut cells = expand(state);

    for round in 0..ROUNDS {
        add_constant(&mut cells, round);
        sub_cells(&mut cells);
        shift_rows(&mut cells);
        mix_column_serial(&mut cells);
    }

    pack(&cells, state);
}
