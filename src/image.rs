#![forbid(unsafe_code)]

//! Provides heap-allocated image types.

use alloc::vec::Vec;

use crate::pixel_formats::PackedARGB8888;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
///
/// You don't ever need to call this function yourself, but it's how the image
/// containers convert 2d coordinates into index values within their payload
/// vectors. If you'd like to use the exact same function they do for some
/// reason, you can.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  (y * width + x) as usize
}

/// A direct-color image.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Bitmap<P = PackedARGB8888> {
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<P>,
}
impl<P> Bitmap<P> {
  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut P> {
    if x < self.width && y < self.height {
      let i = xy_width_to_index(x, y, self.width);
      self.pixels.get_mut(i)
    } else {
      None
    }
  }

  /// Flips the image top to bottom.
  ///
  /// Renderers that hand out bottom-up framebuffers should call this before
  /// encoding, since PNG scanlines run top to bottom.
  #[inline]
  pub fn vertical_flip(&mut self) {
    let mut data: &mut [P] = self.pixels.as_mut_slice();
    let mut temp_height = self.height;
    while temp_height > 1 {
      let (low, mid) = data.split_at_mut(self.width as usize);
      let (mid, high) = mid.split_at_mut(mid.len() - self.width as usize);
      low.swap_with_slice(high);
      data = mid;
      temp_height -= 2;
    }
  }
}

#[test]
fn test_vertical_flip() {
  use alloc::vec;
  let mut bitmap: Bitmap<u8> = Bitmap { width: 2, height: 3, pixels: vec![1, 1, 2, 2, 3, 3] };
  bitmap.vertical_flip();
  assert_eq!(bitmap.pixels, vec![3, 3, 2, 2, 1, 1]);
  // odd-height flips leave the middle row alone
  bitmap.vertical_flip();
  assert_eq!(bitmap.pixels, vec![1, 1, 2, 2, 3, 3]);
}
