//! Reads frames of pixel data from DICOM P10 files through a [`FrameSource`],
//! either one frame after another or with one thread per frame sharing a
//! single open file handle.
//!
//! All DICOM parsing is done by the frame source. The default source,
//! [`DcmfxFrameSource`], uses DCMfx.

mod dcmfx_frame_source;
mod frame;
mod frame_error;
mod frame_reader;
mod frame_source;

pub use dcmfx_frame_source::{DcmfxFileHandle, DcmfxFrameSource};
pub use frame::Frame;
pub use frame_error::FrameError;
pub use frame_reader::{
  SEQUENTIAL_FRAME_COUNT, close_file, open_file, read_frame,
  read_frames_concurrent, read_frames_sequential,
};
pub use frame_source::FrameSource;
