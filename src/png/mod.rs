//! Module for writing PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Library Design Assumptions
//!
//! This encoder aims to be small and completely predictable, not to make
//! small files:
//!
//! * Input is always 8-bit RGBA (PNG color type 6), never interlaced, taken
//!   from [`PackedARGB8888`](crate::pixel_formats::PackedARGB8888) pixels.
//! * Every scanline uses filter method "None", and the zlib stream uses
//!   *stored* (uncompressed) DEFLATE blocks. The output is byte for byte
//!   deterministic, and exactly sized: the full file length is known before
//!   a single byte is staged.
//! * The whole zlib stream goes into a single `IDAT` chunk.
//!
//! The interesting part is that the output is produced in one streaming
//! pass. Three framings nest inside each other (PNG chunk, zlib stream,
//! DEFLATE block), and two checksums with different coverage run at the same
//! time:
//!
//! * The chunk CRC-32 covers the chunk type plus every chunk data byte,
//!   including zlib and DEFLATE framing bytes.
//! * The zlib Adler-32 covers only the decompressed payload (filter bytes
//!   plus pixel bytes), skipping all framing.
//!
//! Both are updated incrementally as each byte lands in the output buffer,
//! so the DEFLATE stream never exists as its own allocation.
//!
//! ## Usage
//!
//! Call [`png_encode_rgba`] (or [`Bitmap::try_to_png_bytes`]) to get the
//! encoded file as a byte vector, or [`png_write_path`] to also write it to
//! disk. Failures are reported as [`ImprintError`](crate::ImprintError); no
//! partially encoded output is ever returned as success.

mod crc32;
pub(crate) use crc32::*;

mod adler32;
pub(crate) use adler32::*;

mod ihdr;
pub use ihdr::*;

mod iend;
pub use iend::*;

#[cfg(feature = "alloc")]
mod idat;
#[cfg(feature = "alloc")]
pub(crate) use idat::*;

#[cfg(feature = "alloc")]
mod encode;
#[cfg(feature = "alloc")]
pub use encode::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
