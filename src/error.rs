/// An error from the `imprint` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImprintError {
  /// The declared width and/or height of this image is 0.
  ///
  /// Encoding rejects empty images before staging any output bytes.
  WidthOrHeightZero,

  /// A computed size doesn't fit within its 32-bit field in the output.
  ///
  /// PNG chunk lengths are 32-bit, so an image whose data stream would
  /// exceed that can't be written.
  SizeOverflow,

  /// The allocator couldn't give us enough space.
  #[cfg(feature = "alloc")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
  Alloc,

  /// The destination couldn't be created or written.
  #[cfg(feature = "std")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
  Write,
}
#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for ImprintError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
#[cfg(feature = "std")]
impl From<std::io::Error> for ImprintError {
  #[inline]
  fn from(_: std::io::Error) -> Self {
    Self::Write
  }
}
