use alloc::vec::Vec;
use core::fmt;

use digest::XofReader;

use crate::core::{
    prp::keccak::KeccakF1600,
    sponge::Sponge,
    variant::Variant,
};

/// Resumable view of a finalized SHAKE output stream.
#[derive(Clone)]
pub struct ShakeReader<V: Variant> {
    sponge: Sponge<KeccakF1600, V>,
}

impl<V: Variant> ShakeReader<V> {
    pub(crate) fn new(sponge: Sponge<KeccakF1600, V>) -> Self {
        debug_assert!(!sponge.is_absorbing());
        Self { sponge }
    }

    /// Fill `out` with the next bytes of the stream.
    pub fn squeeze_mut<T>(&mut self, out: T)
    where
        T: AsMut<[u8]>,
    {
        self.sponge.squeeze_mut(out);
    }

    /// Next `n` bytes of the stream.
    pub fn squeeze_n(&mut self, n: usize) -> Vec<u8> {
        self.sponge.squeeze_n(n)
    }
}

impl<V: Variant> XofReader for ShakeReader<V> {
    fn read(&mut self, buffer: &mut [u8]) {
        self.sponge.squeeze_mut(buffer);
    }
}

impl<V: Variant> fmt::Debug for ShakeReader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShakeReader").field("sponge", &self.sponge).finish()
    }
}
