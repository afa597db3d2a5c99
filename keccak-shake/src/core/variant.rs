use generic_array::{
    typenum::{
        U136,
        U168,
        U32,
        U64,
    },
    ArrayLength,
};

/// Parameters of a sponge mode running on a 1600-bit permutation.
pub trait Variant: Sized + Clone {
    /// Size of the outer state in bytes.
    /// In other words, size of data chunk absorbed or squeezed per permutation.
    type RateSize: ArrayLength<u8>;

    /// Size of the inner state in bytes, never touched by absorb/squeeze I/O.
    type CapacitySize: ArrayLength<u8>;

    /// Domain-separation bits appended to the message, least significant bit first.
    const SUFFIX: u8;

    /// Number of valid bits in `SUFFIX`.
    const SUFFIX_BITS: usize;
}

/// SHAKE128: 1344-bit rate, 256-bit capacity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shake128Params;

impl Variant for Shake128Params {
    type RateSize = U168;
    type CapacitySize = U32;
    const SUFFIX: u8 = 0b1111;
    const SUFFIX_BITS: usize = 4;
}

/// SHAKE256: 1088-bit rate, 512-bit capacity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shake256Params;

impl Variant for Shake256Params {
    type RateSize = U136;
    type CapacitySize = U64;
    const SUFFIX: u8 = 0b1111;
    const SUFFIX_BITS: usize = 4;
}
