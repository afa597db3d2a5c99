use core::convert::TryFrom;

use generic_array::typenum::U200;

use super::PRP;
use crate::{
    err,
    try_or,
    Error::{
        self,
        LengthMismatch,
        ValueOutOfRange,
    },
    Result,
};

mod consts;
mod round;

pub use consts::{
    PI,
    PLEN,
    RC,
    RHO,
    ROUNDS,
    STATE_BYTES,
};
pub use round::{
    f1600,
    rotl,
    round,
    trace,
    Trace,
};

#[cfg(test)]
mod tests;

/// A pseudo-random permutation implementing `Keccak-F[1600]`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeccakF1600 {
    /// Inner state for transformation
    state: [u64; PLEN],
}

impl KeccakF1600 {
    /// Use `Keccak-F[1600]` sponge function on inner state
    pub fn permutation(&mut self) {
        f1600(&mut self.state);
    }

    /// Apply the single round `r`, rejecting round indices past the last round.
    pub fn try_round(&mut self, r: usize) -> Result<()> {
        try_or!(r < ROUNDS, ValueOutOfRange(ROUNDS - 1, r))?;
        round(&mut self.state, r);
        Ok(())
    }

    /// Lanes of the state, lane `(x, y)` at index `x + 5 * y`.
    pub fn lanes(&self) -> &[u64; PLEN] {
        &self.state
    }

    /// State serialized as 25 little-endian lanes.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut bytes = [0u8; STATE_BYTES];
        self.eject(&mut bytes);
        bytes
    }
}

impl From<[u64; PLEN]> for KeccakF1600 {
    fn from(state: [u64; PLEN]) -> Self {
        Self { state }
    }
}

impl From<KeccakF1600> for [u64; PLEN] {
    fn from(f: KeccakF1600) -> Self {
        f.state
    }
}

impl TryFrom<&[u8]> for KeccakF1600 {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != STATE_BYTES {
            return err!(LengthMismatch(STATE_BYTES, bytes.len()));
        }
        let mut s = Self::default();
        s.inject(bytes);
        Ok(s)
    }
}

impl PRP for KeccakF1600 {
    type StateSize = U200;

    fn transform(&mut self) {
        self.permutation();
    }

    fn inject(&mut self, block: &[u8]) {
        debug_assert!(block.len() <= STATE_BYTES);
        for (lane, chunk) in self.state.iter_mut().zip(block.chunks(8)) {
            let mut le = [0u8; 8];
            le[..chunk.len()].copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(le);
        }
    }

    fn eject(&self, out: &mut [u8]) {
        debug_assert!(out.len() <= STATE_BYTES);
        for (chunk, lane) in out.chunks_mut(8).zip(self.state.iter()) {
            let n = chunk.len();
            chunk.copy_from_slice(&lane.to_le_bytes()[..n]);
        }
    }
}
