use alloc::vec::Vec;
use core::fmt;

use generic_array::{
    typenum::Unsigned,
    GenericArray,
};

use super::{
    prp::PRP,
    variant::Variant,
};
use crate::{
    try_or,
    Error::{
        AbsorbAfterFinalize,
        ValueOutOfRange,
    },
    Result,
};

type Rate<V> = GenericArray<u8, <V as Variant>::RateSize>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Phase {
    Absorbing,
    Squeezing,
}

/// Sponge automaton: absorbs input block by block, then squeezes an unbounded output stream.
///
/// The phase moves from absorbing to squeezing exactly once, on [`finalize`](Sponge::finalize)
/// or on the first squeeze. Absorbing afterwards is rejected.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sponge<F, V: Variant> {
    /// Sponge transform together with its internal state.
    s: F,

    /// Pending input block while absorbing, current output window while squeezing.
    buf: Rate<V>,

    phase: Phase,

    /// Absorbing: number of bits of `buf` filled.
    /// Squeezing: number of bytes of `buf` already emitted.
    pos: usize,
}

impl<F, V> Sponge<F, V>
where
    F: PRP + Default,
    V: Variant,
{
    /// Create a Sponge object, initialize state with zero bits.
    pub fn init() -> Self {
        Self::init_with_state(F::default())
    }
}

impl<F: PRP, V: Variant> Sponge<F, V> {
    /// Create a Sponge object with an explicit state.
    pub fn init_with_state(s: F) -> Self {
        debug_assert_eq!(V::RateSize::USIZE + V::CapacitySize::USIZE, F::StateSize::USIZE);
        Self {
            s,
            buf: GenericArray::default(),
            phase: Phase::Absorbing,
            pos: 0,
        }
    }

    fn rate() -> usize {
        V::RateSize::USIZE
    }

    pub fn is_absorbing(&self) -> bool {
        self.phase == Phase::Absorbing
    }

    /// XOR the full pending block into the state and transform.
    fn commit(&mut self) {
        self.s.inject(&self.buf);
        self.s.transform();
        for b in self.buf.iter_mut() {
            *b = 0;
        }
        self.pos = 0;
    }

    /// Account for `n` more buffered bits, committing once the block is full.
    fn update(&mut self, n: usize) {
        self.pos += n;
        if Self::rate() * 8 == self.pos {
            self.commit();
        }
    }

    /// Append the `n` low bits of `bits`, least significant first.
    fn push_bits(&mut self, bits: u8, n: usize) {
        for i in 0..n {
            let bit = (bits >> i) & 1;
            self.buf[self.pos / 8] |= bit << (self.pos % 8);
            self.update(1);
        }
    }

    /// Absorb a byte slice into Sponge object.
    pub fn absorb<T>(&mut self, xr: T) -> Result<()>
    where
        T: AsRef<[u8]>,
    {
        try_or!(self.is_absorbing(), AbsorbAfterFinalize)?;
        let mut x = xr.as_ref();
        if self.pos % 8 != 0 {
            for &byte in x {
                self.push_bits(byte, 8);
            }
            return Ok(());
        }
        while !x.is_empty() {
            let pos = self.pos / 8;
            let n = core::cmp::min(Self::rate() - pos, x.len());
            self.buf[pos..pos + n].copy_from_slice(&x[..n]);
            x = &x[n..];
            self.update(n * 8);
        }
        Ok(())
    }

    /// Absorb the `n` low bits of `bits`, least significant first; `n` is at most 8.
    ///
    /// Byte input may follow, it is then absorbed at the unaligned bit position.
    pub fn absorb_bits(&mut self, bits: u8, n: usize) -> Result<()> {
        try_or!(self.is_absorbing(), AbsorbAfterFinalize)?;
        try_or!(n <= 8, ValueOutOfRange(8, n))?;
        self.push_bits(bits, n);
        Ok(())
    }

    /// Append the domain suffix and `pad10*1`, absorb the final block(s) and switch to squeezing.
    ///
    /// When fewer than `SUFFIX_BITS + 2` bits are left in the pending block, padding spills into one
    /// more block. Finalizing a squeezing sponge has no effect.
    pub fn finalize(&mut self) {
        if !self.is_absorbing() {
            return;
        }
        self.push_bits(V::SUFFIX, V::SUFFIX_BITS);
        self.push_bits(1, 1);
        self.buf[Self::rate() - 1] |= 0x80;
        self.commit();
        self.s.eject(&mut self.buf);
        self.phase = Phase::Squeezing;
        self.pos = 0;
    }

    /// Squeeze a byte slice from Sponge object, continuing where the previous squeeze stopped.
    /// Finalizes first if still absorbing.
    pub fn squeeze_mut<T>(&mut self, mut yr: T)
    where
        T: AsMut<[u8]>,
    {
        self.finalize();
        let mut y = yr.as_mut();
        while !y.is_empty() {
            if Self::rate() == self.pos {
                self.s.transform();
                self.s.eject(&mut self.buf);
                self.pos = 0;
            }
            let n = core::cmp::min(Self::rate() - self.pos, y.len());
            let (head, tail) = core::mem::take(&mut y).split_at_mut(n);
            head.copy_from_slice(&self.buf[self.pos..self.pos + n]);
            y = tail;
            self.pos += n;
        }
    }

    /// Squeeze array, length inferred from output type.
    pub fn squeeze<R>(&mut self) -> R
    where
        R: AsMut<[u8]> + Default,
    {
        let mut output = R::default();
        self.squeeze_mut(&mut output);
        output
    }

    /// Squeeze vector, length is known at runtime.
    pub fn squeeze_n(&mut self, n: usize) -> Vec<u8> {
        let mut v = alloc::vec![0; n];
        self.squeeze_mut(&mut v);
        v
    }
}

impl<F, V> Default for Sponge<F, V>
where
    F: PRP + Default,
    V: Variant,
{
    fn default() -> Self {
        Self::init()
    }
}

impl<F: PRP, V: Variant> fmt::Debug for Sponge<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut state = GenericArray::<u8, F::StateSize>::default();
        self.s.eject(&mut state);
        write!(
            f,
            "{:?}@{}[{}|{}]",
            self.phase,
            self.pos,
            hex::encode(&state[..Self::rate()]),
            hex::encode(&state[Self::rate()..])
        )
    }
}
