#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point: module graph, re-exports and the rate-variant
// type aliases.
//======================================================================

// --- Module declarations ---
pub mod consts;

mod backends;
mod sponge;

pub mod aead;
pub mod hash;


// --- Re-exports ---
pub use ::aead as aead_api;
pub use zeroize;

pub use crate::hash::hash;

// --- Rate-Variant Type Aliases ---

/// PHOTON-Beetle-AEAD[32]: 4-byte rate, the primary NIST LWC parameter set.
pub type PhotonBeetleAead32 = aead::PhotonBeetleAead<{ consts::AEAD32_RATE }>;

/// PHOTON-Beetle-AEAD[128]: 16-byte rate, one permutation call per 16
/// message bytes.
pub type PhotonBeetleAead128 = aead::PhotonBeetleAead<{ consts::AEAD128_RATE }>;
