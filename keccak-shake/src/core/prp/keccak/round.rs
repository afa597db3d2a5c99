use super::consts::{
    PI,
    PLEN,
    RC,
    RHO,
    ROUNDS,
};

/// Rotate `lane` left by `n` bits.
#[inline(always)]
pub fn rotl(lane: u64, n: u32) -> u64 {
    lane.rotate_left(n)
}

/// Column parities are computed in full before any lane is touched.
#[inline(always)]
fn theta(a: &mut [u64; PLEN]) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    let mut t = [0u64; 5];
    for x in 0..5 {
        t[x] = c[(x + 4) % 5] ^ rotl(c[(x + 1) % 5], 1);
    }
    for y in 0..5 {
        for x in 0..5 {
            a[x + 5 * y] ^= t[x];
        }
    }
}

#[inline(always)]
fn rho_pi(a: &mut [u64; PLEN]) {
    let mut carried = a[1];
    for (&j, &n) in PI.iter().zip(RHO.iter()) {
        let saved = a[j];
        a[j] = rotl(carried, n);
        carried = saved;
    }
}

/// Each row is snapshotted before it is overwritten.
#[inline(always)]
fn chi(a: &mut [u64; PLEN]) {
    for y in 0..5 {
        let mut row = [0u64; 5];
        row.copy_from_slice(&a[5 * y..5 * y + 5]);
        for x in 0..5 {
            a[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

#[inline(always)]
fn iota(a: &mut [u64; PLEN], r: usize) {
    a[0] ^= RC[r];
}

/// Apply round `r` of `Keccak-f[1600]` to `a` in place.
///
/// # Panics
///
/// Panics if `r >= ROUNDS`. Use `KeccakF1600::try_round` for a checked variant.
pub fn round(a: &mut [u64; PLEN], r: usize) {
    theta(a);
    rho_pi(a);
    chi(a);
    iota(a, r);
}

/// `Keccak-f[1600]`: all 24 rounds, in order.
pub fn f1600(a: &mut [u64; PLEN]) {
    for r in 0..ROUNDS {
        round(a, r);
    }
}

/// Iterator over the intermediate states of a permutation, see [`trace`].
#[derive(Clone, Debug)]
pub struct Trace {
    state: [u64; PLEN],
    round: usize,
}

/// Run the permutation on `state` one round at a time, yielding the state after every round.
///
/// The last item equals `f1600` applied to `state`.
pub fn trace(state: [u64; PLEN]) -> Trace {
    Trace { state, round: 0 }
}

impl Iterator for Trace {
    type Item = [u64; PLEN];

    fn next(&mut self) -> Option<Self::Item> {
        if self.round == ROUNDS {
            return None;
        }
        round(&mut self.state, self.round);
        self.round += 1;
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = ROUNDS - self.round;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trace {}
