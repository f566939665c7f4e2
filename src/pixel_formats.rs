//! Module for pixel formats.
//!
//! The encoder's input is a *packed* format: each pixel is one `u32` holding
//! all four channels. This is what software framebuffers and windowing APIs
//! commonly hand out. File formats instead tend to want one byte per channel
//! in a fixed memory order, so there's also a byte-per-channel format here
//! and conversions between the two.
//!
//! **Note:** the current formats are what's required for PNG support. Other
//! formats might be added in the future as more image formats are added.

use bytemuck::{Pod, Zeroable};

/// A packed 32-bit color, `0xAARRGGBB`.
///
/// When viewed as little-endian bytes the channels appear in the order B, G,
/// R, A. This matches win32-style framebuffer output, and is *not* the byte
/// order that PNG stores, so encoding always permutes the channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct PackedARGB8888(pub u32);
impl PackedARGB8888 {
  /// Packs the four channels into a single value.
  #[inline]
  #[must_use]
  pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | (b as u32))
  }
  /// The red channel.
  #[inline]
  #[must_use]
  pub const fn r(self) -> u8 {
    (self.0 >> 16) as u8
  }
  /// The green channel.
  #[inline]
  #[must_use]
  pub const fn g(self) -> u8 {
    (self.0 >> 8) as u8
  }
  /// The blue channel.
  #[inline]
  #[must_use]
  pub const fn b(self) -> u8 {
    self.0 as u8
  }
  /// The alpha channel.
  #[inline]
  #[must_use]
  pub const fn a(self) -> u8 {
    (self.0 >> 24) as u8
  }
}

/// An RGBA pixel, one byte per channel, in the memory order PNG stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct RGBA8888 {
  /// red
  pub r: u8,
  /// green
  pub g: u8,
  /// blue
  pub b: u8,
  /// alpha
  pub a: u8,
}
impl From<PackedARGB8888> for RGBA8888 {
  #[inline]
  #[must_use]
  fn from(p: PackedARGB8888) -> Self {
    Self { r: p.r(), g: p.g(), b: p.b(), a: p.a() }
  }
}
impl From<RGBA8888> for PackedARGB8888 {
  #[inline]
  #[must_use]
  fn from(p: RGBA8888) -> Self {
    Self::from_channels(p.r, p.g, p.b, p.a)
  }
}

#[test]
fn test_packed_channel_round_trip() {
  let p = PackedARGB8888::from_channels(1, 2, 3, 4);
  assert_eq!(p.0, 0x04_01_02_03);
  assert_eq!([p.r(), p.g(), p.b(), p.a()], [1, 2, 3, 4]);
  let unpacked = RGBA8888::from(p);
  assert_eq!(unpacked, RGBA8888 { r: 1, g: 2, b: 3, a: 4 });
  assert_eq!(PackedARGB8888::from(unpacked), p);
}
