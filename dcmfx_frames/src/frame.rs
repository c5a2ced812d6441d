//! Holds a single frame of pixel data read from an open file handle.

/// A single frame of pixel data in its raw form, as stored in its DICOM P10
/// file. The frame's data is borrowed from the handle it was read from, so a
/// frame can't be used once that handle has been closed.
///
/// Dropping a frame releases it.
///
#[derive(Debug, PartialEq)]
pub struct Frame<'h> {
  number: usize,
  value: &'h [u8],
}

impl<'h> Frame<'h> {
  /// Creates a new frame with the given 1-based frame number and data.
  ///
  pub fn new(number: usize, value: &'h [u8]) -> Self {
    Self { number, value }
  }

  /// Returns the number of this frame, i.e. 1 for the first frame in its
  /// DICOM data set, 2 for the second frame, etc.
  ///
  pub fn number(&self) -> usize {
    self.number
  }

  /// Returns the raw pixel data for this frame.
  ///
  pub fn value(&self) -> &'h [u8] {
    self.value
  }

  /// The size in bytes of this frame of pixel data.
  ///
  pub fn len(&self) -> usize {
    self.value.len()
  }

  /// Returns whether this frame of pixel data is empty.
  ///
  pub fn is_empty(&self) -> bool {
    self.value.is_empty()
  }
}

impl Drop for Frame<'_> {
  fn drop(&mut self) {
    log::info!("Releasing frame {}", self.number);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn frame_data_test() {
    let data = vec![0, 1, 2, 3];
    let frame = Frame::new(2, &data[1..]);

    assert_eq!(frame.number(), 2);
    assert_eq!(frame.value(), &[1, 2, 3]);
    assert_eq!(frame.len(), 3);
    assert!(!frame.is_empty());
  }

  #[test]
  fn empty_frame_test() {
    let frame = Frame::new(1, &[]);

    assert_eq!(frame.len(), 0);
    assert!(frame.is_empty());
  }
}
