use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "wide_state")] {
        mod wide;
        pub(crate) use wide::photon256;
    } else {
        mod soft;
        pub(crate) use soft::photon256;
    }
}

// The backend that was not selected stays compiled in test builds so the two
// state encodings can be checked against each other.
#[cfg(all(test, not(feature = "wide_state")))]
pub(crate) mod wide;
#[cfg(all(test, feature = "wide_state"))]
pub(crate) mod soft;
