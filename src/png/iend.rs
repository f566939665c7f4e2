use bytemuck::{Pod, Zeroable};

use super::png_crc;
use crate::{ascii_array::AsciiArray, int_endian::U32BE};

/// Image End chunk, laid out exactly as its bytes appear in a file.
///
/// IEND carries no data, so the whole chunk is the same 12 bytes for every
/// PNG ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct IEND {
  length: U32BE,
  chunk_ty: AsciiArray<4>,
  crc: U32BE,
}
impl Default for IEND {
  #[inline]
  #[must_use]
  fn default() -> Self {
    let mut out = Self {
      length: U32BE::from_u32(0),
      chunk_ty: AsciiArray(*b"IEND"),
      crc: U32BE::default(),
    };
    out.crc = U32BE::from_u32(out.compute_crc());
    out
  }
}
impl IEND {
  /// CRC-32 over the chunk type; there's no data for it to cover.
  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    png_crc(self.chunk_ty.as_bytes().iter().copied())
  }

  /// This chunk as the bytes that go in a file.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }
}

#[test]
fn test_iend_is_the_well_known_constant() {
  let iend = IEND::default();
  let expected: [u8; 12] = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];
  assert_eq!(iend.as_bytes(), expected.as_slice());
  assert_eq!(iend.compute_crc(), 0xAE42_6082);
}
