use imprint::{
  png::{png_encode_rgba, png_write_path, PNG_SIGNATURE},
  Bitmap, ImprintError, PackedARGB8888,
};
use miniz_oxide::inflate::decompress_to_vec_zlib;

struct DecodedPng {
  width: u32,
  height: u32,
  rgba: Vec<u8>,
}

/// Re-reads an encoded file the way a strict decoder would, checking every
/// piece of fixed framing along the way, and returns the unfiltered pixel
/// bytes.
fn decode_stored_png(bytes: &[u8]) -> DecodedPng {
  assert_eq!(&bytes[..8], &PNG_SIGNATURE);
  // IHDR: length 13, RGBA8, no interlace
  assert_eq!(&bytes[8..16], b"\0\0\0\x0dIHDR");
  let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
  let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
  assert_eq!(&bytes[24..29], &[8, 6, 0, 0, 0]);
  assert_eq!(&bytes[29..33], &reference_crc32(&bytes[12..29]).to_be_bytes());
  // a single IDAT holds the whole zlib stream
  let data_len = u32::from_be_bytes(bytes[33..37].try_into().unwrap()) as usize;
  assert_eq!(&bytes[37..41], b"IDAT");
  let zlib = &bytes[41..41 + data_len];
  let decompressed = decompress_to_vec_zlib(zlib).expect("valid zlib stream");
  // IEND comes right after the IDAT crc, and then nothing
  let iend = &bytes[41 + data_len + 4..];
  assert_eq!(iend, &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);

  let line = width as usize * 4 + 1;
  assert_eq!(decompressed.len(), line * height as usize);
  let mut rgba = Vec::with_capacity(decompressed.len() - height as usize);
  for row in decompressed.chunks_exact(line) {
    assert_eq!(row[0], 0, "every scanline uses filter None");
    rgba.extend_from_slice(&row[1..]);
  }
  DecodedPng { width, height, rgba }
}

/// Bitwise CRC-32, kept independent of the crate's table-driven version.
fn reference_crc32(bytes: &[u8]) -> u32 {
  let mut crc: u32 = 0xFFFF_FFFF;
  for &b in bytes {
    crc ^= u32::from(b);
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
    }
  }
  crc ^ 0xFFFF_FFFF
}

fn reference_adler32(bytes: &[u8]) -> u32 {
  let mut s1: u32 = 1;
  let mut s2: u32 = 0;
  for &b in bytes {
    s1 = (s1 + u32::from(b)) % 65521;
    s2 = (s2 + s1) % 65521;
  }
  s2 << 16 | s1
}

fn random_pixels(count: usize) -> Vec<PackedARGB8888> {
  super::rand_bytes(count * 4)
    .chunks_exact(4)
    .map(|c| PackedARGB8888(u32::from_le_bytes(c.try_into().unwrap())))
    .collect()
}

fn expected_rgba(pixels: &[PackedARGB8888]) -> Vec<u8> {
  pixels.iter().flat_map(|p| [p.r(), p.g(), p.b(), p.a()]).collect()
}

#[test]
fn test_round_trip_2x2_distinct_colors() {
  let pixels = vec![
    PackedARGB8888::from_channels(255, 0, 0, 255),
    PackedARGB8888::from_channels(0, 255, 0, 255),
    PackedARGB8888::from_channels(0, 0, 255, 128),
    PackedARGB8888::from_channels(17, 34, 51, 68),
  ];
  let bitmap = Bitmap { width: 2, height: 2, pixels: pixels.clone() };
  let bytes = bitmap.try_to_png_bytes().unwrap();

  // 18 payload bytes fit one stored block: data size 29, file size 57 + 29
  assert_eq!(bytes.len(), 86);

  let decoded = decode_stored_png(&bytes);
  assert_eq!((decoded.width, decoded.height), (2, 2));
  assert_eq!(decoded.rgba, expected_rgba(&pixels));
  // raster order survives re-packing too
  let repacked: Vec<PackedARGB8888> = decoded
    .rgba
    .chunks_exact(4)
    .map(|c| PackedARGB8888::from_channels(c[0], c[1], c[2], c[3]))
    .collect();
  assert_eq!(repacked, pixels);
}

#[test]
fn test_round_trip_assorted_sizes() {
  for (w, h) in [(1_u32, 1_u32), (3, 2), (16, 16), (255, 1), (1, 255), (64, 48), (129, 7)] {
    let pixels = random_pixels((w * h) as usize);
    let bytes = png_encode_rgba(w, h, &pixels).unwrap();
    let decoded = decode_stored_png(&bytes);
    assert_eq!((decoded.width, decoded.height), (w, h), "failed {w}x{h}");
    assert_eq!(decoded.rgba, expected_rgba(&pixels), "failed {w}x{h}");
  }
}

#[test]
fn test_file_size_is_exactly_predictable() {
  for (w, h) in [(1_u32, 1_u32), (2, 2), (64, 255), (64, 256), (100, 100)] {
    let pixels = vec![PackedARGB8888::default(); (w * h) as usize];
    let bytes = png_encode_rgba(w, h, &pixels).unwrap();
    let image_size = (u64::from(w) * 4 + 1) * u64::from(h);
    let blocks = (image_size + 65534) / 65535;
    let data_size = image_size + blocks * 5 + 6;
    assert_eq!(bytes.len() as u64, 57 + data_size, "failed {w}x{h}");
  }
}

#[test]
fn test_stored_block_splitting_on_the_wire() {
  // 64x255 gives (64*4+1)*255 == 65535 payload bytes: one final block
  let bytes = png_encode_rgba(64, 255, &vec![PackedARGB8888(0); 64 * 255]).unwrap();
  let zlib_len = u32::from_be_bytes(bytes[33..37].try_into().unwrap()) as usize;
  let zlib = &bytes[41..41 + zlib_len];
  assert_eq!(zlib[2], 1, "single block must carry the final flag");
  assert_eq!([zlib[3], zlib[4]], [0xFF, 0xFF]);
  assert_eq!([zlib[5], zlib[6]], [0x00, 0x00], "NLEN is LEN's complement");

  // one more scanline: a full non-final block then a 257-byte final block
  let bytes = png_encode_rgba(64, 256, &vec![PackedARGB8888(0); 64 * 256]).unwrap();
  let zlib_len = u32::from_be_bytes(bytes[33..37].try_into().unwrap()) as usize;
  let zlib = &bytes[41..41 + zlib_len];
  assert_eq!(zlib[2], 0);
  assert_eq!([zlib[3], zlib[4]], [0xFF, 0xFF]);
  let second = &zlib[2 + 5 + 65535..];
  assert_eq!(second[0], 1, "final flag goes on the last block only");
  assert_eq!(u16::from_le_bytes([second[1], second[2]]), 257);
  assert_eq!(u16::from_le_bytes([second[3], second[4]]), !257_u16);
}

#[test]
fn test_idat_crc_covers_exactly_type_and_data() {
  let pixels = random_pixels(9);
  let mut bytes = png_encode_rgba(3, 3, &pixels).unwrap();
  let data_len = u32::from_be_bytes(bytes[33..37].try_into().unwrap()) as usize;
  let crc_at = 41 + data_len;
  let stored_crc = u32::from_be_bytes(bytes[crc_at..crc_at + 4].try_into().unwrap());
  assert_eq!(stored_crc, reference_crc32(&bytes[37..crc_at]));

  // corrupt one payload byte: the crc no longer matches, but the length
  // field is untouched
  bytes[60] ^= 0xFF;
  assert_ne!(stored_crc, reference_crc32(&bytes[37..crc_at]));
  assert_eq!(u32::from_be_bytes(bytes[33..37].try_into().unwrap()) as usize, data_len);
}

#[test]
fn test_adler_trailer_matches_reference() {
  let pixels = random_pixels(7 * 5);
  let bytes = png_encode_rgba(7, 5, &pixels).unwrap();
  let data_len = u32::from_be_bytes(bytes[33..37].try_into().unwrap()) as usize;
  let zlib = &bytes[41..41 + data_len];
  let decompressed = decompress_to_vec_zlib(zlib).unwrap();
  let trailer = &zlib[zlib.len() - 4..];
  assert_eq!(trailer, &reference_adler32(&decompressed).to_be_bytes());
}

#[test]
fn test_zero_dimensions_are_rejected() {
  assert_eq!(png_encode_rgba(0, 4, &[]), Err(ImprintError::WidthOrHeightZero));
  assert_eq!(png_encode_rgba(4, 0, &[]), Err(ImprintError::WidthOrHeightZero));
}

#[test]
fn test_vertical_flip_then_encode() {
  let top = PackedARGB8888::from_channels(10, 20, 30, 40);
  let bottom = PackedARGB8888::from_channels(50, 60, 70, 80);
  let mut bitmap = Bitmap { width: 2, height: 2, pixels: vec![top, top, bottom, bottom] };
  bitmap.vertical_flip();
  let decoded = decode_stored_png(&bitmap.try_to_png_bytes().unwrap());
  assert_eq!(decoded.rgba, expected_rgba(&[bottom, bottom, top, top]));
}

#[test]
fn test_png_write_path_round_trip() {
  let dir = std::env::temp_dir();
  let path = dir.join("imprint_write_path_test.png");
  let pixels = random_pixels(4 * 3);
  png_write_path(&path, 4, 3, &pixels).unwrap();
  let bytes = std::fs::read(&path).unwrap();
  let decoded = decode_stored_png(&bytes);
  assert_eq!(decoded.rgba, expected_rgba(&pixels));
  std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_png_write_path_reports_sink_failure() {
  let path = std::path::Path::new("/definitely/not/a/real/directory/out.png");
  let err = png_write_path(path, 1, 1, &[PackedARGB8888(0)]).unwrap_err();
  assert_eq!(err, ImprintError::Write);
  assert!(!path.exists());
}
