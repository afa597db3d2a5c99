use generic_array::ArrayLength;

pub(crate) mod keccak;

/// Pseudo-random permutation.
///
/// Actually, it may be non-bijective as the inverse transform is not used in sponge construction.
#[allow(clippy::upper_case_acronyms)]
pub trait PRP {
    /// Size of the full state in bytes.
    /// The rate and capacity of any sponge mode running on top of it must add up to this size.
    type StateSize: ArrayLength<u8>;

    /// Transform full state.
    fn transform(&mut self);

    /// XOR `block` into the leading bytes of the state.
    fn inject(&mut self, block: &[u8]);

    /// Copy the leading `out.len()` bytes of the state into `out`.
    fn eject(&self, out: &mut [u8]);
}
