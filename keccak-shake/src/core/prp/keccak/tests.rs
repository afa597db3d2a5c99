use core::convert::TryFrom;

use rand::{
    rngs::StdRng,
    Rng,
    SeedableRng,
};

use super::*;
use crate::Error::{
    LengthMismatch,
    ValueOutOfRange,
};

const F1600_ZERO: [u64; PLEN] = [
    0xf1258f7940e1dde7, 0x84d5ccf933c0478a, 0xd598261ea65aa9ee, 0xbd1547306f80494d, 0x8b284e056253d057,
    0xff97a42d7f8e6fd4, 0x90fee5a0a44647c4, 0x8c5bda0cd6192e76, 0xad30a6f71b19059c, 0x30935ab7d08ffc64,
    0xeb5aa93f2317d635, 0xa9a6e6260d712103, 0x81a57c16dbcf555f, 0x43b831cd0347c826, 0x01f22f1a11a5569f,
    0x05e5635a21d9ae61, 0x64befef28cc970f2, 0x613670957bc46611, 0xb87c5a554fd00ecb, 0x8c3ee88a1ccf32c8,
    0x940c7922ae3a2614, 0x1841f924a2c509e4, 0x16f53526e70465c2, 0x75f644e97f30a13b, 0xeaf1ff7b5ceca249,
];

const F1600_DEADBEEF: [u64; PLEN] = [
    0x7173a7277803e95d, 0x3656eb7d19296af9, 0x4883c95bba641ef9, 0x0f8c58c1926b2b70, 0x3630d1c46fb91da2,
    0x7ad7edc1c35a15be, 0xad0e0d7a7e79c83e, 0xeb925c406ae3ddad, 0x1002660782a97423, 0xc91bc66c9dbcc65f,
    0x8a020d12ca8c888e, 0xe1b5c1c33cd385d4, 0xf49441b8b518f868, 0xcc750c48d33aaccc, 0x8561f882c78902d0,
    0x6af3d19d68416cb4, 0x5b9fe9d6d1db77fc, 0x1a663bf46624144e, 0x9c8a550cb27b4472, 0x8452a12152a829d3,
    0x7f02ca518f787743, 0x6d904ec41a1c24e9, 0xf2b5c8e89acd3f4e, 0xbc0ca7d88750f34e, 0xdb091acfd464eb54,
];

#[test]
fn rotl_wraps_high_bits() {
    assert_eq!(rotl(1, 1), 2);
    assert_eq!(rotl(1, 63), 1 << 63);
    assert_eq!(rotl(1 << 63, 1), 1);
    assert_eq!(rotl(0xdead_beef_cafe_babe, 32), 0xcafe_babe_dead_beef);
}

#[test]
fn relocation_targets_are_a_derangement_of_nonzero_lanes() {
    let mut seen = [false; PLEN];
    for &j in PI.iter() {
        assert!(j != 0 && j < PLEN);
        assert!(!seen[j], "lane {} relocated twice", j);
        seen[j] = true;
    }
    assert!(RHO.iter().all(|&n| (1..64).contains(&n)));
}

#[test]
fn round_on_zero_state_injects_round_constant() {
    for r in 0..ROUNDS {
        let mut a = [0u64; PLEN];
        round(&mut a, r);
        assert_eq!(a[0], RC[r], "round {}", r);
        assert!(a[1..].iter().all(|&l| l == 0), "round {}", r);
    }
}

#[test]
fn f1600_zero_state() {
    let mut a = [0u64; PLEN];
    f1600(&mut a);
    assert_eq!(a, F1600_ZERO);
}

#[test]
fn f1600_deadbeef_state() {
    let mut a = [0u64; PLEN];
    a[0] = 0xdead_beef_cafe_babe;
    f1600(&mut a);
    assert_eq!(a, F1600_DEADBEEF);
}

#[test]
fn f1600_matches_reference_crate() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..64 {
        let mut a = [0u64; PLEN];
        for lane in a.iter_mut() {
            *lane = rng.gen();
        }
        let mut expected = a;
        keccak::f1600(&mut expected);
        f1600(&mut a);
        assert_eq!(a, expected);
    }
}

#[test]
fn trace_yields_every_round() {
    let states: alloc::vec::Vec<_> = trace([0u64; PLEN]).collect();
    assert_eq!(states.len(), ROUNDS);
    assert_eq!(states[0][0], 0x0000_0000_0000_0001);
    assert_eq!(states[1][0], 0x0000_0000_0000_8083);
    assert_eq!(states[1][1], 0x0000_1000_0000_0000);
    assert_eq!(states[2][0], 0x8030_5000_01e0_840c);
    assert_eq!(states[2][1], 0x38ca_9830_8230_0106);
    assert_eq!(states[ROUNDS - 1], F1600_ZERO);

    let mut t = trace([0u64; PLEN]);
    assert_eq!(t.len(), ROUNDS);
    t.next();
    assert_eq!(t.len(), ROUNDS - 1);
}

#[test]
fn keccak_rounds_compose_into_permutation() {
    let mut by_round = KeccakF1600::from([0u64; PLEN]);
    for r in 0..ROUNDS {
        by_round.try_round(r).unwrap();
    }
    let mut whole = KeccakF1600::default();
    whole.permutation();
    assert_eq!(by_round, whole);
    assert_eq!(whole.lanes(), &F1600_ZERO);
}

#[test]
fn try_round_rejects_out_of_range_index() {
    let mut f = KeccakF1600::from(F1600_DEADBEEF);
    assert_eq!(f.try_round(ROUNDS), Err(ValueOutOfRange(ROUNDS - 1, ROUNDS)));
    assert_eq!(f.lanes(), &F1600_DEADBEEF);
}

#[test]
fn bytes_are_little_endian_lanes() {
    let mut bytes = [0u8; STATE_BYTES];
    bytes[0] = 0xbe;
    bytes[7] = 0xde;
    bytes[8] = 0x01;
    bytes[STATE_BYTES - 1] = 0x80;
    let f = KeccakF1600::try_from(&bytes[..]).unwrap();
    assert_eq!(f.lanes()[0], 0xde00_0000_0000_00be);
    assert_eq!(f.lanes()[1], 0x01);
    assert_eq!(f.lanes()[PLEN - 1], 0x8000_0000_0000_0000);
    assert_eq!(&f.to_bytes()[..], &bytes[..]);
    assert_eq!(KeccakF1600::from(<[u64; PLEN]>::from(f)), f);

    assert_eq!(KeccakF1600::try_from(&bytes[1..]), Err(LengthMismatch(STATE_BYTES, STATE_BYTES - 1)));
}

#[test]
fn inject_and_eject_partial_lanes() {
    let mut f = KeccakF1600::default();
    f.inject(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b]);
    assert_eq!(f.lanes()[0], 0x0807_0605_0403_0201);
    assert_eq!(f.lanes()[1], 0x0b0a09);
    let mut out = [0u8; 10];
    f.eject(&mut out);
    assert_eq!(out, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a]);
}
