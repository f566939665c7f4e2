use alloc::vec::Vec;

use super::{adler32_update, crc32_update, ADLER32_SEED};

/// The most payload bytes one stored DEFLATE block can carry.
///
/// The block header's LEN field is 16 bits, so this is `u16::MAX`. Never
/// 65536: a "round" block size would truncate to LEN 0 on the wire.
pub(crate) const DEFLATE_MAX_STORED: u64 = 65535;

/// Per-block framing overhead: final flag + LEN + NLEN.
pub(crate) const STORED_BLOCK_HEADER_LEN: u64 = 5;

/// zlib framing overhead: 2 header bytes + 4 Adler-32 trailer bytes.
pub(crate) const ZLIB_OVERHEAD: u64 = 6;

/// Streams a payload into `out` as a zlib-wrapped run of stored DEFLATE
/// blocks, keeping two checksums current as every byte lands.
///
/// The caller owns chunk layout; this type owns the zlib layer down. It
/// carries the enclosing chunk's running CRC-32 through all bytes it emits
/// (framing included), and the stream's Adler-32 through payload bytes only.
/// Callers must push exactly `payload_len` bytes between
/// [`begin`](Self::begin) and [`finish`](Self::finish), in any split they
/// like: block boundaries are handled here and don't need to line up with
/// `push` calls.
#[derive(Debug, Clone)]
pub(crate) struct StoredZlib {
  crc: u32,
  adler: u32,
  payload_remaining: u64,
  block_remaining: u64,
}
impl StoredZlib {
  /// Emits the 2-byte zlib header and readies the block cursor.
  ///
  /// `crc` is the chunk's running CRC state, already seeded with the chunk
  /// type bytes. `payload_len` is the total decompressed stream length:
  /// filter bytes plus pixel bytes.
  pub(crate) fn begin(out: &mut Vec<u8>, crc: u32, payload_len: u64) -> Self {
    // 0x08: deflate with a 256-byte window claim, 0x1D: no preset
    // dictionary, level-0 hint, and it makes the pair a multiple of 31.
    // Stored blocks never reference the window, so the small claim is fine.
    let header = [0x08, 0x1D];
    out.extend_from_slice(&header);
    Self {
      crc: crc32_update(crc, &header),
      adler: ADLER32_SEED,
      payload_remaining: payload_len,
      block_remaining: 0,
    }
  }

  /// Appends payload bytes, starting new stored blocks as needed.
  pub(crate) fn push(&mut self, out: &mut Vec<u8>, mut bytes: &[u8]) {
    while !bytes.is_empty() {
      if self.block_remaining == 0 {
        self.start_block(out);
      }
      let n = u64::min(bytes.len() as u64, self.block_remaining) as usize;
      let (now, later) = bytes.split_at(n);
      out.extend_from_slice(now);
      self.crc = crc32_update(self.crc, now);
      self.adler = adler32_update(self.adler, now);
      self.block_remaining -= n as u64;
      self.payload_remaining -= n as u64;
      bytes = later;
    }
  }

  /// Emits one 5-byte stored block header.
  ///
  /// The final-block flag goes on the block that will hold the last payload
  /// byte, which is exactly when the remaining payload fits in one block.
  fn start_block(&mut self, out: &mut Vec<u8>) {
    debug_assert!(self.payload_remaining > 0);
    let len = u64::min(self.payload_remaining, DEFLATE_MAX_STORED) as u16;
    let is_final = self.payload_remaining <= DEFLATE_MAX_STORED;
    let [len_lo, len_hi] = len.to_le_bytes();
    let header = [u8::from(is_final), len_lo, len_hi, !len_lo, !len_hi];
    out.extend_from_slice(&header);
    self.crc = crc32_update(self.crc, &header);
    self.block_remaining = u64::from(len);
  }

  /// Emits the big-endian Adler-32 trailer and hands back the chunk's CRC
  /// state, which now covers the complete zlib stream.
  pub(crate) fn finish(self, out: &mut Vec<u8>) -> u32 {
    debug_assert_eq!(self.payload_remaining, 0);
    debug_assert_eq!(self.block_remaining, 0);
    let trailer = self.adler.to_be_bytes();
    out.extend_from_slice(&trailer);
    crc32_update(self.crc, &trailer)
  }
}
