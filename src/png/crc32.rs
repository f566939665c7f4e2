pub(crate) const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c = c >> 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Folds `bytes` into a running CRC-32 state.
///
/// Seed the state with `u32::MAX`, then invert the final state to get the
/// value that goes into the file. Threading the state through successive
/// calls is what lets chunk emission and checksum computation interleave
/// instead of buffering a chunk's data up front.
#[inline]
pub(crate) fn crc32_update(mut crc: u32, bytes: &[u8]) -> u32 {
  for byte in bytes.iter().copied() {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc
}

/// CRC-32 of a complete byte sequence.
#[inline]
pub(crate) fn png_crc(iter: impl Iterator<Item = u8>) -> u32 {
  let mut crc = u32::MAX;
  for byte in iter {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc ^ u32::MAX
}

#[test]
fn test_crc32_known_vectors() {
  assert_eq!(png_crc(b"".iter().copied()), 0);
  assert_eq!(png_crc(b"The quick brown fox jumps over the lazy dog".iter().copied()), 0x414F_A339);
  // IEND's chunk CRC covers only the four type bytes.
  assert_eq!(png_crc(b"IEND".iter().copied()), 0xAE42_6082);
}

#[test]
fn test_crc32_update_matches_one_shot() {
  let data = b"interleaved emission";
  let (head, tail) = data.split_at(7);
  let threaded = crc32_update(crc32_update(u32::MAX, head), tail) ^ u32::MAX;
  assert_eq!(threaded, png_crc(data.iter().copied()));
}
