use alloc::vec::Vec;
use core::fmt;

use digest::{
    ExtendableOutputDirty,
    Reset,
    Update,
};

use crate::{
    core::{
        prp::keccak::KeccakF1600,
        sponge::Sponge,
        variant::{
            Shake128Params,
            Shake256Params,
            Variant,
        },
    },
    panic_if_not,
    Result,
};

mod reader;
pub use reader::ShakeReader;


/// Streaming SHAKE session: feed input with [`update`](Shake::update), read output with
/// [`digest`](Shake::digest).
///
/// The first digest request finalizes the session. From then on every `digest(n)` returns the first
/// `n` bytes of the same output stream, and `update` is rejected until [`reset`](Shake::reset).
#[derive(Clone)]
pub struct Shake<V: Variant> {
    sponge: Sponge<KeccakF1600, V>,
}

pub type Shake128 = Shake<Shake128Params>;
pub type Shake256 = Shake<Shake256Params>;

impl<V: Variant> Shake<V> {
    pub fn new() -> Self {
        Self { sponge: Sponge::init() }
    }

    /// Drop all absorbed input and any finalized output, back to a fresh session.
    pub fn reset(&mut self) {
        self.sponge = Sponge::init();
    }

    /// Absorb `data`. Fails with `AbsorbAfterFinalize` once a digest has been requested.
    pub fn update<T>(&mut self, data: T) -> Result<()>
    where
        T: AsRef<[u8]>,
    {
        self.sponge.absorb(data)
    }

    /// Absorb the `n <= 8` low bits of `bits`, least significant first.
    pub fn update_bits(&mut self, bits: u8, n: usize) -> Result<()> {
        self.sponge.absorb_bits(bits, n)
    }

    pub fn is_finalized(&self) -> bool {
        !self.sponge.is_absorbing()
    }

    /// Fill `out` with the leading bytes of the output stream.
    pub fn digest_into<T>(&mut self, out: T)
    where
        T: AsMut<[u8]>,
    {
        self.reader().squeeze_mut(out);
    }

    /// Leading bytes of the output stream, length inferred from the output type.
    pub fn digest_array<R>(&mut self) -> R
    where
        R: AsMut<[u8]> + Default,
    {
        self.sponge.finalize();
        self.sponge.clone().squeeze()
    }

    /// First `len` bytes of the output stream.
    pub fn digest(&mut self, len: usize) -> Vec<u8> {
        self.reader().squeeze_n(len)
    }

    /// Finalize and return a reader positioned at the start of the output stream.
    /// Unlike `digest`, successive reads on the reader continue the stream.
    pub fn reader(&mut self) -> ShakeReader<V> {
        self.sponge.finalize();
        ShakeReader::new(self.sponge.clone())
    }
}

impl<V: Variant> Default for Shake<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> fmt::Debug for Shake<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shake").field("sponge", &self.sponge).finish()
    }
}

/// Panics when called on a finalized session, the trait has no way to report the error.
impl<V: Variant> Update for Shake<V> {
    fn update(&mut self, data: impl AsRef<[u8]>) {
        let absorbed = self.sponge.absorb(data);
        panic_if_not!(absorbed.is_ok());
    }
}

impl<V: Variant> Reset for Shake<V> {
    fn reset(&mut self) {
        Shake::reset(self);
    }
}

impl<V: Variant> ExtendableOutputDirty for Shake<V> {
    type Reader = ShakeReader<V>;

    fn finalize_xof_dirty(&mut self) -> Self::Reader {
        self.reader()
    }
}

fn xof<V: Variant>(input: &[u8], len: usize) -> Vec<u8> {
    Shake::<V>::new().chain(input).digest(len)
}

/// SHAKE128 of `input`, `len` bytes of output.
pub fn shake128(input: impl AsRef<[u8]>, len: usize) -> Vec<u8> {
    xof::<Shake128Params>(input.as_ref(), len)
}

/// SHAKE256 of `input`, `len` bytes of output.
pub fn shake256(input: impl AsRef<[u8]>, len: usize) -> Vec<u8> {
    xof::<Shake256Params>(input.as_ref(), len)
}
