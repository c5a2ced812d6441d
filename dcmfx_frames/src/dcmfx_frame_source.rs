//! A frame source that uses DCMfx to read DICOM P10 files.

use std::path::{Path, PathBuf};

use dcmfx::core::*;
use dcmfx::p10::*;
use dcmfx::pixel_data::*;

use crate::{Frame, FrameError, FrameSource};

/// Reads frames of pixel data using DCMfx.
///
/// Opening a file reads the whole DICOM P10 file and copies each of its frames
/// of pixel data into the returned [`DcmfxFileHandle`]. Reading a frame then
/// borrows from the handle and doesn't copy any data.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct DcmfxFrameSource;

/// A DICOM P10 file opened by [`DcmfxFrameSource`].
///
/// The handle holds only owned, immutable data once opened, which is what
/// allows its frames to be read from multiple threads at once. DCMfx data sets
/// are not thread-safe and so are not kept after opening.
///
#[derive(Debug)]
pub struct DcmfxFileHandle {
  path: PathBuf,
  transfer_syntax_name: Option<&'static str>,
  frames: Vec<Vec<u8>>,
}

impl DcmfxFileHandle {
  /// The path of the opened file.
  ///
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// The name of the opened file's transfer syntax, if it specifies one.
  ///
  pub fn transfer_syntax_name(&self) -> Option<&'static str> {
    self.transfer_syntax_name
  }

  /// The number of frames of pixel data in the opened file.
  ///
  pub fn frame_count(&self) -> usize {
    self.frames.len()
  }

  /// Returns a one-line description of the opened file.
  ///
  pub fn summary(&self) -> String {
    let mut summary = format!(
      "Opened \"{}\", frames: {}",
      self.path.display(),
      self.frames.len()
    );

    if let Some(name) = self.transfer_syntax_name {
      summary.push_str(&format!(", transfer syntax: {name}"));
    }

    summary
  }
}

impl FrameSource for DcmfxFrameSource {
  type Handle = DcmfxFileHandle;

  fn open(&self, path: &Path) -> Result<DcmfxFileHandle, FrameError> {
    let data_set = DataSet::read_p10_file(path).map_err(|e| {
      FrameError::open_from_dcmfx_lines(
        path,
        &e.to_lines(&format!("reading \"{}\"", path.display())),
      )
    })?;

    let transfer_syntax_name =
      data_set.get_transfer_syntax().ok().map(|ts| ts.name);

    let task_description =
      format!("reading pixel data from \"{}\"", path.display());

    let frames = data_set
      .get_pixel_data_frames()
      .map_err(|e| {
        let lines = match e {
          PixelDataFilterError::DataError(e) => e.to_lines(&task_description),
          PixelDataFilterError::P10Error(e) => e.to_lines(&task_description),
        };

        FrameError::open_from_dcmfx_lines(path, &lines)
      })?
      .iter()
      .map(|frame| frame.to_bytes().to_vec())
      .collect();

    let handle = DcmfxFileHandle {
      path: path.to_path_buf(),
      transfer_syntax_name,
      frames,
    };

    log::info!("{}", handle.summary());

    Ok(handle)
  }

  /// Returns a frame that borrows its data from the handle. All frames were
  /// read by DCMfx when the file was opened, so this makes no further calls
  /// into DCMfx and reads nothing from the file.
  ///
  fn read_frame<'h>(
    &self,
    handle: &'h DcmfxFileHandle,
    frame_number: usize,
  ) -> Result<Frame<'h>, FrameError> {
    frame_number
      .checked_sub(1)
      .and_then(|index| handle.frames.get(index))
      .map(|value| Frame::new(frame_number, value))
      .ok_or_else(|| {
        FrameError::read_frame(
          frame_number,
          "Frame number is out of range",
          format!(
            "Frame number {} is not in the range 1-{} of \"{}\"",
            frame_number,
            handle.frames.len(),
            handle.path.display()
          ),
        )
      })
  }

  fn close(&self, handle: DcmfxFileHandle) -> bool {
    drop(handle);
    true
  }
}
