//! Keccak-f[1600] permutation and the SHAKE extendable-output functions built on it.
//!
//! The crate is layered bottom-up:
//!
//! * [`rotl`], [`round`] and [`f1600`] operate on a bare `[u64; 25]` state;
//! * [`KeccakF1600`] wraps that state behind the [`PRP`] trait;
//! * [`Sponge`] runs the absorb/squeeze protocol for a [`Variant`];
//! * [`Shake`] is the streaming session handle (`reset`, `update`, `digest`).
//!
//! ```
//! use keccak_shake::Shake256;
//!
//! let mut h = Shake256::new();
//! h.update(b"abc").unwrap();
//! let d = h.digest(32);
//! assert_eq!(&d[..4], &[0x48u8, 0x33, 0x66, 0x60]);
//! ```
#![no_std]

// Digests are returned as heap vectors
extern crate alloc;

// Location logging and `std::error::Error` need the feature "std"
#[cfg(feature = "std")]
extern crate std;

// Stub used when there is nowhere to print to.
// Macros are exported at crate root level, that's why it's defined here.
#[cfg(not(feature = "std"))]
#[macro_export]
macro_rules! println {
    () => {{}};
    ($($arg:tt)*) => {{}};
}

// Reexport macro at the same level as `no_std`.
#[cfg(feature = "std")]
pub use std::println;

#[cfg(not(feature = "err-location-log"))]
pub const LOCATION_LOG: bool = false;

#[cfg(feature = "err-location-log")]
pub const LOCATION_LOG: bool = true;

pub mod errors;
pub use errors::{
    error_handler::*,
    error_messages::{
        Error,
        Result,
    },
};

mod core;
mod lanes;
mod shake;

pub use crate::{
    core::{
        prp::{
            keccak::{
                f1600,
                rotl,
                round,
                trace,
                KeccakF1600,
                Trace,
                PI,
                PLEN,
                RC,
                RHO,
                ROUNDS,
                STATE_BYTES,
            },
            PRP,
        },
        sponge::Sponge,
        variant::{
            Shake128Params,
            Shake256Params,
            Variant,
        },
    },
    lanes::to_lanes,
    shake::{
        shake128,
        shake256,
        Shake,
        Shake128,
        Shake256,
        ShakeReader,
    },
};

// Reexport digest and generic_array so callers can name the traits and lengths used in the API.
pub use digest::{
    self,
    generic_array::{
        self,
        typenum,
    },
};
