use alloc::vec::Vec;

/// Pack bytes into little-endian 64-bit lanes, the way the state stores them.
/// A partial final lane is zero-padded in its high bytes.
pub fn to_lanes(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks(8)
        .map(|chunk| {
            let mut le = [0u8; 8];
            le[..chunk.len()].copy_from_slice(chunk);
            u64::from_le_bytes(le)
        })
        .collect()
}
