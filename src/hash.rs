//======================================================================
// src/hash.rs
// PHOTON-Beetle-Hash: one-shot 32-byte digest over a complete message.
//======================================================================

use crate::consts::{DIGEST_BYTES, HASH_INITIAL_RATE, HASH_RATE, STATE_BYTES};
use crate::sponge::{self, State};

/// Computes the 32-byte PHOTON-Beetle-Hash digest of `msg`.
///
/// The first block is absorbed at a 16-byte rate straight into the fresh
/// state; everything past it goes through the 4-byte-rate sponge.
pub fn hash(msg: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut state: State = [0u8; STATE_BYTES];
    let mut digest = [0u8; DIGEST_BYTES];

    if msg.is_empty() {
        state[STATE_BYTES - 1] ^= 1 << 5;
        sponge::gen_tag(&mut state, &mut digest);
        return digest;
    }

    if msg.len() <= HASH_INITIAL_RATE {
        state[..msg.len()].copy_from_slice(msg);

        let c0 = if msg.len() < HASH_INITIAL_RATE {
            state[msg.len()] ^= 0x01;
            1
        } else {
            2
        };
        state[STATE_BYTES - 1] ^= c0 << 5;

        sponge::gen_tag(&mut state, &mut digest);
        return digest;
    }

    state[..HASH_INITIAL_RATE].copy_from_slice(&msg[..HASH_INITIAL_RATE]);

    let rem = &msg[HASH_INITIAL_RATE..];
    let c0 = if rem.len() % HASH_RATE == 0 { 1 } else { 2 };
    sponge::absorb::<HASH_RATE>(&mut state, rem, c0);

    sponge::gen_tag(&mut state, &mut digest);
    digest
}
