/// The Adler-32 state for a stream with no bytes in it yet.
pub(crate) const ADLER32_SEED: u32 = 1;

/// Folds `bytes` into a running Adler-32 state.
///
/// The state packs the two mod-65521 sums as `s2 << 16 | s1`, which is also
/// the final checksum value, so no separate "finish" step exists. zlib
/// defines the stream's initial state as [`ADLER32_SEED`].
#[inline]
pub(crate) fn adler32_update(state: u32, bytes: &[u8]) -> u32 {
  let mut s1 = state & 0xFFFF;
  let mut s2 = state >> 16;
  for byte in bytes.iter().copied() {
    s1 = (s1 + u32::from(byte)) % 65521;
    s2 = (s2 + s1) % 65521;
  }
  s2 << 16 | s1
}

#[test]
fn test_adler32_known_vectors() {
  assert_eq!(adler32_update(ADLER32_SEED, b""), 1);
  assert_eq!(adler32_update(ADLER32_SEED, b"Wikipedia"), 0x11E6_0398);
}

#[test]
fn test_adler32_update_is_incremental() {
  let data = b"split anywhere, same answer";
  let whole = adler32_update(ADLER32_SEED, data);
  for split in 0..data.len() {
    let (head, tail) = data.split_at(split);
    assert_eq!(adler32_update(adler32_update(ADLER32_SEED, head), tail), whole);
  }
}
