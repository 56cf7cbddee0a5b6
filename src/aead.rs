//======================================================================
// src/aead.rs
// PHOTON-Beetle-AEAD[r] for r in {4, 16} bytes: slice-level entry points
// plus the aead-trait front end.
//======================================================================

use aead::{
    consts::{U0, U16},
    generic_array::GenericArray,
    AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends;
use crate::consts::{
    check_rate, AEAD128_RATE, AEAD32_RATE, KEY_BYTES, NONCE_BYTES, STATE_BYTES, TAG_BYTES,
};
use crate::sponge::{self, State};

/// Loads nonce and key into a fresh state: nonce in the rate-side half,
/// key in the capacity-side half.
fn init_state(key: &[u8; KEY_BYTES], nonce: &[u8; NONCE_BYTES]) -> State {
    let mut state = [0u8; STATE_BYTES];
    state[..NONCE_BYTES].copy_from_slice(nonce);
    state[NONCE_BYTES..].copy_from_slice(key);
    state
}

/// Selects the two domain separation constants from the (data present?,
/// block-aligned?) categories. Each of the eight combinations reaches tag
/// generation with a distinct capacity value.
fn domain_constants<const RATE: usize>(ad_len: usize, msg_len: usize) -> (u8, u8) {
    let f0 = msg_len > 0;
    let f1 = ad_len % RATE == 0;
    let c0 = if f0 && f1 {
        1
    } else if f0 {
        2
    } else if f1 {
        3
    } else {
        4
    };

    let f2 = ad_len > 0;
    let f3 = msg_len % RATE == 0;
    let c1 = if f2 && f3 {
        1
    } else if f2 {
        2
    } else if f3 {
        5
    } else {
        6
    };

    (c0, c1)
}

/// Encrypts `buffer` in place and returns the 16-byte authentication tag.
///
/// `RATE` must be 4 or 16; anything else fails to compile. Reusing a nonce
/// under the same key forfeits all security guarantees.
pub fn encrypt_in_place<const RATE: usize>(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    associated_data: &[u8],
    buffer: &mut [u8],
) -> [u8; TAG_BYTES] {
    const { assert!(check_rate(RATE)) };

    let mut state = init_state(key, nonce);
    let mut tag = [0u8; TAG_BYTES];

    if associated_data.is_empty() && buffer.is_empty() {
        state[STATE_BYTES - 1] ^= 1 << 5;
        sponge::gen_tag(&mut state, &mut tag);
        return tag;
    }

    let (c0, c1) = domain_constants::<RATE>(associated_data.len(), buffer.len());

    if !associated_data.is_empty() {
        sponge::absorb::<RATE>(&mut state, associated_data, c0);
    }

    if !buffer.is_empty() {
        for block in buffer.chunks_mut(RATE) {
            backends::photon256(&mut state);
            sponge::rho::<RATE>(&mut state, block);
        }

        state[STATE_BYTES - 1] ^= c1 << 5;
    }

    sponge::gen_tag(&mut state, &mut tag);
    tag
}

/// Decrypts `buffer` in place and verifies the tag in constant time.
///
/// Returns `false` when the key, nonce, associated data, ciphertext or tag
/// has been altered; the buffer is zeroed before returning so unauthenticated
/// plaintext can not leak out.
pub fn decrypt_in_place<const RATE: usize>(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    tag: &[u8; TAG_BYTES],
    associated_data: &[u8],
    buffer: &mut [u8],
) -> bool {
    const { assert!(check_rate(RATE)) };

    let mut state = init_state(key, nonce);
    let mut computed = [0u8; TAG_BYTES];

    if associated_data.is_empty() && buffer.is_empty() {
        state[STATE_BYTES - 1] ^= 1 << 5;
        sponge::gen_tag(&mut state, &mut computed);
        return sponge::verify_tag(tag, &computed);
    }

    let (c0, c1) = domain_constants::<RATE>(associated_data.len(), buffer.len());

    if !associated_data.is_empty() {
        sponge::absorb::<RATE>(&mut state, associated_data, c0);
    }

    if !buffer.is_empty() {
        for block in buffer.chunks_mut(RATE) {
            backends::photon256(&mut state);
            sponge::inv_rho::<RATE>(&mut state, block);
        }

        state[STATE_BYTES - 1] ^= c1 << 5;
    }

    sponge::gen_tag(&mut state, &mut computed);

    let ok = sponge::verify_tag(tag, &computed);
    if !ok {
        buffer.zeroize();
    }
    ok
}

/// Encrypts `txt` into `enc` (same length) and writes the tag. To encrypt a
/// buffer without the copy, use [`encrypt_in_place`].
pub fn encrypt<const RATE: usize>(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    associated_data: &[u8],
    txt: &[u8],
    enc: &mut [u8],
    tag: &mut [u8; TAG_BYTES],
) {
    assert_eq!(txt.len(), enc.len(), "cipher text buffer length mismatch");

    enc.copy_from_slice(txt);
    *tag = encrypt_in_place::<RATE>(key, nonce, associated_data, enc);
}

/// Decrypts `enc` into `txt` (same length), returning the verification flag.
/// On `false` the output buffer is zeroed and must not be consumed.
pub fn decrypt<const RATE: usize>(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    tag: &[u8; TAG_BYTES],
    associated_data: &[u8],
    enc: &[u8],
    txt: &mut [u8],
) -> bool {
    assert_eq!(enc.len(), txt.len(), "plain text buffer length mismatch");

    txt.copy_from_slice(enc);
    decrypt_in_place::<RATE>(key, nonce, tag, associated_data, txt)
}

/// PHOTON-Beetle-AEAD[32] encryption.
pub fn encrypt_32(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    associated_data: &[u8],
    txt: &[u8],
    enc: &mut [u8],
    tag: &mut [u8; TAG_BYTES],
) {
    encrypt::<AEAD32_RATE>(key, nonce, associated_data, txt, enc, tag)
}

/// PHOTON-Beetle-AEAD[32] verified decryption.
pub fn decrypt_32(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    tag: &[u8; TAG_BYTES],
    associated_data: &[u8],
    enc: &[u8],
    txt: &mut [u8],
) -> bool {
    decrypt::<AEAD32_RATE>(key, nonce, tag, associated_data, enc, txt)
}

/// PHOTON-Beetle-AEAD[128] encryption.
pub fn encrypt_128(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    associated_data: &[u8],
    txt: &[u8],
    enc: &mut [u8],
    tag: &mut [u8; TAG_BYTES],
) {
    encrypt::<AEAD128_RATE>(key, nonce, associated_data, txt, enc, tag)
}

/// PHOTON-Beetle-AEAD[128] verified decryption.
pub fn decrypt_128(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    tag: &[u8; TAG_BYTES],
    associated_data: &[u8],
    enc: &[u8],
    txt: &mut [u8],
) -> bool {
    decrypt::<AEAD128_RATE>(key, nonce, tag, associated_data, enc, txt)
}

/// PHOTON-Beetle AEAD cipher, parameterized by the rate in bytes.
///
/// Use through the [`crate::PhotonBeetleAead32`] and
/// [`crate::PhotonBeetleAead128`] aliases. The key is wiped when the cipher
/// is dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct PhotonBeetleAead<const RATE: usize> {
    key: [u8; KEY_BYTES],
}

impl<const RATE: usize> KeySizeUser for PhotonBeetleAead<RATE> {
    type KeySize = U16;
}

impl<const RATE: usize> KeyInit for PhotonBeetleAead<RATE> {
    fn new(key: &Key<Self>) -> Self {
        let mut key_bytes = [0u8; KEY_BYTES];
        key_bytes.copy_from_slice(key.as_slice());
        Self { key: key_bytes }
    }
}

impl<const RATE: usize> AeadCore for PhotonBeetleAead<RATE> {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl<const RATE: usize> AeadInPlace for PhotonBeetleAead<RATE> {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let mut nonce_bytes = [0u8; NONCE_BYTES];
        nonce_bytes.copy_from_slice(nonce.as_slice());

        let tag = encrypt_in_place::<RATE>(&self.key, &nonce_bytes, associated_data, buffer);
        Ok(GenericArray::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let mut nonce_bytes = [0u8; NONCE_BYTES];
        nonce_bytes.copy_from_slice(nonce.as_slice());

        let mut tag_bytes = [0u8; TAG_BYTES];
        tag_bytes.copy_from_slice(tag.as_slice());

        if decrypt_in_place::<RATE>(&self.key, &nonce_bytes, &tag_bytes, associated_data, buffer) {
            Ok(())
        } else {
            Err(aead::Error)
        }
    }
}
