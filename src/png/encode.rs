#![forbid(unsafe_code)]

use alloc::vec::Vec;

use super::{
  crc32_update, StoredZlib, DEFLATE_MAX_STORED, IEND, IHDR, PNG_SIGNATURE, STORED_BLOCK_HEADER_LEN,
  ZLIB_OVERHEAD,
};
use crate::{image::Bitmap, pixel_formats::PackedARGB8888, ImprintError};

/// The byte counts of one encoded file, computed before any byte is staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EncodeLayout {
  /// filter byte + pixel bytes, per scanline
  line_size: u64,
  /// all scanlines together: the decompressed zlib payload
  image_size: u64,
  /// the full zlib stream, which is also the IDAT chunk's data length
  data_size: u64,
  /// signature through IEND
  file_size: u64,
}
impl EncodeLayout {
  fn compute(width: u32, height: u32) -> Result<Self, ImprintError> {
    if width == 0 || height == 0 {
      return Err(ImprintError::WidthOrHeightZero);
    }
    let line_size = u64::from(width) * 4 + 1;
    let image_size =
      line_size.checked_mul(u64::from(height)).ok_or(ImprintError::SizeOverflow)?;
    let block_count = (image_size + (DEFLATE_MAX_STORED - 1)) / DEFLATE_MAX_STORED;
    let data_size = image_size + block_count * STORED_BLOCK_HEADER_LEN + ZLIB_OVERHEAD;
    if data_size > u64::from(u32::MAX) {
      return Err(ImprintError::SizeOverflow);
    }
    // signature + IHDR + IDAT length/type + chunk data + IDAT crc + IEND
    let file_size = 8 + 25 + 8 + data_size + 4 + 12;
    Ok(Self { line_size, image_size, data_size, file_size })
  }
}

/// Rewrites packed pixels into PNG's R,G,B,A byte order.
///
/// Always into a fresh buffer: the channel permutation is not byte-for-byte
/// idempotent, so transforming in place while reading would alias.
fn normalize_to_rgba(pixels: &[PackedARGB8888]) -> Result<Vec<u8>, ImprintError> {
  let mut rgba: Vec<u8> = Vec::new();
  rgba.try_reserve(pixels.len() * 4)?;
  for px in pixels.iter().copied() {
    rgba.extend_from_slice(&[px.r(), px.g(), px.b(), px.a()]);
  }
  Ok(rgba)
}

/// Encodes an 8-bit RGBA PNG from packed pixels.
///
/// The output is a complete file: signature, `IHDR`, a single `IDAT`
/// holding a zlib stream of stored DEFLATE blocks, and `IEND`. Any
/// conformant PNG reader decodes it back to exactly the input pixels. The
/// whole thing is produced in one pass, with the chunk CRC-32 and stream
/// Adler-32 accumulated as bytes are emitted.
///
/// On failure nothing is returned: staged bytes are dropped, and the caller
/// never sees a truncated file as success.
///
/// ## Panics
/// * If `pixels` doesn't hold exactly `width * height` entries.
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub fn png_encode_rgba(
  width: u32, height: u32, pixels: &[PackedARGB8888],
) -> Result<Vec<u8>, ImprintError> {
  let layout = EncodeLayout::compute(width, height)?;
  assert_eq!(
    pixels.len() as u64,
    u64::from(width) * u64::from(height),
    "pixel count must be width * height"
  );
  let rgba = normalize_to_rgba(pixels)?;

  let mut out: Vec<u8> = Vec::new();
  out.try_reserve(layout.file_size as usize)?;
  out.extend_from_slice(&PNG_SIGNATURE);
  out.extend_from_slice(IHDR::rgba8(width, height).as_bytes());

  out.extend_from_slice(&(layout.data_size as u32).to_be_bytes());
  out.extend_from_slice(b"IDAT");
  let crc = crc32_update(u32::MAX, b"IDAT");
  let mut zlib = StoredZlib::begin(&mut out, crc, layout.image_size);
  let row_bytes = (layout.line_size - 1) as usize;
  for row in rgba.chunks_exact(row_bytes) {
    // filter method "None" opens every scanline
    zlib.push(&mut out, &[0]);
    zlib.push(&mut out, row);
  }
  let crc = zlib.finish(&mut out);
  out.extend_from_slice(&(crc ^ u32::MAX).to_be_bytes());

  out.extend_from_slice(IEND::default().as_bytes());
  debug_assert_eq!(out.len() as u64, layout.file_size);
  Ok(out)
}

impl Bitmap<PackedARGB8888> {
  /// Encodes this bitmap as the bytes of a PNG file.
  ///
  /// See [`png_encode_rgba`].
  ///
  /// ## Panics
  /// * If the pixel vec doesn't hold exactly `width * height` entries.
  #[inline]
  #[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
  pub fn try_to_png_bytes(&self) -> Result<Vec<u8>, ImprintError> {
    png_encode_rgba(self.width, self.height, &self.pixels)
  }
}

/// Encodes the image and writes it to a file.
///
/// The destination is only touched after encoding has fully succeeded. If
/// the write itself fails, the partial file is removed on a best-effort
/// basis before the error comes back.
///
/// ## Panics
/// * If `pixels` doesn't hold exactly `width * height` entries.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub fn png_write_path<P: AsRef<std::path::Path>>(
  path: P, width: u32, height: u32, pixels: &[PackedARGB8888],
) -> Result<(), ImprintError> {
  let bytes = png_encode_rgba(width, height, pixels)?;
  if let Err(e) = std::fs::write(path.as_ref(), &bytes) {
    let _ = std::fs::remove_file(path.as_ref());
    return Err(ImprintError::from(e));
  }
  Ok(())
}
