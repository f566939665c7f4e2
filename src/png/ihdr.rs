use bytemuck::{Pod, Zeroable};

use super::png_crc;
use crate::{ascii_array::AsciiArray, int_endian::U32BE};

/// Image Header chunk, laid out exactly as its bytes appear in a file.
///
/// All fields store big-endian bytes (or single bytes), so the struct has
/// alignment 1 and [`as_bytes`](Self::as_bytes) can hand out the on-disk
/// form directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct IHDR {
  length: U32BE,
  chunk_ty: AsciiArray<4>,
  width: U32BE,
  height: U32BE,
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
  crc: U32BE,
}
impl IHDR {
  /// A header for an 8-bit truecolor-with-alpha image, not interlaced.
  ///
  /// This is the only pixel format the encoder writes. The CRC field is
  /// filled in, covering the chunk type and data (never the length field or
  /// the CRC itself).
  #[inline]
  #[must_use]
  pub fn rgba8(width: u32, height: u32) -> Self {
    let mut out = Self {
      length: U32BE::from_u32(13),
      chunk_ty: AsciiArray(*b"IHDR"),
      width: U32BE::from_u32(width),
      height: U32BE::from_u32(height),
      bit_depth: 8,
      color_type: 6,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
      crc: U32BE::default(),
    };
    out.crc = U32BE::from_u32(out.compute_crc());
    out
  }

  /// CRC-32 over the chunk type and data fields of this header.
  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    let bytes = bytemuck::bytes_of(self);
    png_crc(bytes[4..bytes.len() - 4].iter().copied())
  }

  /// This chunk as the bytes that go in a file.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }
}
