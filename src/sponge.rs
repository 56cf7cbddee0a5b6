//======================================================================
// src/sponge.rs
// Beetle sponge primitives over the Photon256 permutation: absorption,
// the rho feedback function and its inverse, and tag squeezing.
//======================================================================

use subtle::ConstantTimeEq;

use crate::backends;
use crate::consts::{check_out, check_rate, STATE_BYTES, TAG_BYTES};

/// The packed permutation state. Bytes `0..RATE` are the rate portion, the
/// rest is capacity; domain separation constants land in the top nibble of
/// the last byte.
pub(crate) type State = [u8; STATE_BYTES];

/// Absorbs a message into the state, one permutation per rate-sized block,
/// padding a trailing partial block with `10*`, then folds the domain
/// separation constant into the capacity.
pub(crate) fn absorb<const RATE: usize>(state: &mut State, msg: &[u8], c: u8) {
    const { assert!(check_rate(RATE)) };

    let mut blocks = msg.chunks_exact(RATE);
    for block in blocks.by_ref() {
        backends::photon256(state);

        for (cell, byte) in state[..RATE].iter_mut().zip(block) {
            *cell ^= byte;
        }
    }

    let rem = blocks.remainder();
    if !rem.is_empty() {
        backends::photon256(state);

        for (cell, byte) in state[..rem.len()].iter_mut().zip(rem) {
            *cell ^= byte;
        }
        state[rem.len()] ^= 0x01;
    }

    state[STATE_BYTES - 1] ^= c << 5;
}

/// Shuffles the rate portion: with the rate split into halves `s0 || s1`
/// (little-endian), the result is `s1 || rotr(s0, 1)`.
#[inline(always)]
fn shuffle<const RATE: usize>(state: &State) -> [u8; RATE] {
    let mut shuffled = [0u8; RATE];
    let half = RATE / 2;

    shuffled[..half].copy_from_slice(&state[half..RATE]);

    if RATE == 4 {
        let s0 = u16::from_le_bytes([state[0], state[1]]);
        shuffled[half..].copy_from_slice(&s0.rotate_right(1).to_le_bytes());
    } else {
        let s0 = u64::from_le_bytes(state[..8].try_into().unwrap());
        shuffled[half..].copy_from_slice(&s0.rotate_right(1).to_le_bytes());
    }

    shuffled
}

/// The rho feedback function. Replaces up to `RATE` plaintext bytes with
/// ciphertext in place, while the plaintext (padded with `10*` when the
/// block is short) is folded into the rate portion of the state.
///
/// Every byte is read before it is overwritten, so plaintext and ciphertext
/// may share one buffer.
pub(crate) fn rho<const RATE: usize>(state: &mut State, block: &mut [u8]) {
    const { assert!(check_rate(RATE)) };
    debug_assert!(block.len() <= RATE);

    let shuffled = shuffle::<RATE>(state);

    for (i, byte) in block.iter_mut().enumerate() {
        let pt = *byte;
        *byte = shuffled[i] ^ pt;
        state[i] ^= pt;
    }

    if block.len() < RATE {
        state[block.len()] ^= 0x01;
    }
}

/// Inverse of [`rho`]: replaces ciphertext bytes with plaintext in place,
/// folding the recovered plaintext into the state exactly as encryption did.
pub(crate) fn inv_rho<const RATE: usize>(state: &mut State, block: &mut [u8]) {
    const { assert!(check_rate(RATE)) };
    debug_assert!(block.len() <= RATE);

    let shuffled = shuffle::<RATE>(state);

    for (i, byte) in block.iter_mut().enumerate() {
        let pt = shuffled[i] ^ *byte;
        *byte = pt;
        state[i] ^= pt;
    }

    if block.len() < RATE {
        state[block.len()] ^= 0x01;
    }
}

/// Squeezes an `OUT`-byte tag: one permutation per 16 squeezed bytes.
pub(crate) fn gen_tag<const OUT: usize>(state: &mut State, tag: &mut [u8; OUT]) {
    const { assert!(check_out(OUT)) };

    backends::photon256(state);
    tag[..TAG_BYTES].copy_from_slice(&state[..TAG_BYTES]);

    if OUT > TAG_BYTES {
        backends::photon256(state);
        tag[TAG_BYTES..].copy_from_slice(&state[..TAG_BYTES]);
    }
}

/// Compares two tags without early termination; the running time does not
/// depend on the position of the first differing byte.
pub(crate) fn verify_tag(expected: &[u8; TAG_BYTES], computed: &[u8; TAG_BYTES]) -> bool {
    expected[..].ct_eq(&computed[..]).into()
}
