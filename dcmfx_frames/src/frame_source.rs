//! The interface to the library that opens DICOM files and reads their frames.

use std::path::Path;

use crate::{Frame, FrameError};

/// Opens DICOM files and reads frames of pixel data from them.
///
/// Frames are read concurrently from a single open handle, one thread per
/// frame, so both the source and its handles must be [`Sync`].
///
pub trait FrameSource: Sync {
  /// An open file. It is consumed by [`FrameSource::close()`].
  type Handle: Sync;

  /// Opens the file at the given path.
  ///
  fn open(&self, path: &Path) -> Result<Self::Handle, FrameError>;

  /// Reads the frame with the given 1-based number from an open file. Frame
  /// numbers outside the file's frames are reported as an error.
  ///
  /// Sources are free to do their reading when the file is opened and serve
  /// frames from the handle here. [`crate::DcmfxFrameSource`] does this, so
  /// its reads make no calls into DCMfx.
  ///
  fn read_frame<'h>(
    &self,
    handle: &'h Self::Handle,
    frame_number: usize,
  ) -> Result<Frame<'h>, FrameError>;

  /// Closes an open file, releasing its resources.
  ///
  fn close(&self, handle: Self::Handle) -> bool;
}
