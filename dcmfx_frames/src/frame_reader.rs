//! Opens a DICOM file, reads frames of pixel data from it, and closes it.
//!
//! Errors are logged where they occur and converted to a `bool` result, so
//! callers only see whether each step succeeded.

use std::path::Path;

use dcmfx::core::DcmfxError;

use crate::{FrameError, FrameSource};

/// The number of frames read by [`read_frames_sequential()`].
///
pub const SEQUENTIAL_FRAME_COUNT: usize = 2;

/// Opens the file at the given path. Returns `None` if it can't be opened, in
/// which case the error is logged.
///
pub fn open_file<S: FrameSource>(source: &S, path: &Path) -> Option<S::Handle> {
  log::info!("Opening \"{}\" …", path.display());

  match source.open(path) {
    Ok(handle) => Some(handle),

    Err(e) => {
      log_error(&e, &format!("opening \"{}\"", path.display()));
      None
    }
  }
}

/// Reads a single frame from an open file, where `frame_number` is 1-based.
/// The frame is released before returning. Returns whether the frame was read,
/// and logs the error if it wasn't.
///
pub fn read_frame<S: FrameSource>(
  source: &S,
  handle: &S::Handle,
  frame_number: usize,
) -> bool {
  log::info!("Reading frame {frame_number} …");

  match source.read_frame(handle, frame_number) {
    Ok(frame) => {
      let value = frame.value();
      log::info!("Read frame {}, size: {} bytes", frame.number(), value.len());
      true
    }

    Err(e) => {
      log_error(&e, &format!("reading frame {frame_number}"));
      false
    }
  }
}

/// Closes an open file. This must only be called once all reads of the file's
/// frames have completed.
///
pub fn close_file<S: FrameSource>(source: &S, handle: S::Handle) -> bool {
  log::info!("Closing file …");

  let closed = source.close(handle);
  if closed {
    log::info!("File closed");
  } else {
    log::error!("File could not be closed");
  }

  closed
}

/// Opens the file at the given path and reads its first
/// [`SEQUENTIAL_FRAME_COUNT`] frames one after another, then closes it.
///
/// Returns `false` as soon as the open or a read fails. When a read fails the
/// file is not closed, its handle is dropped instead.
///
pub fn read_frames_sequential<S: FrameSource>(source: &S, path: &Path) -> bool {
  let Some(handle) = open_file(source, path) else {
    return false;
  };

  for frame_number in 1..=SEQUENTIAL_FRAME_COUNT {
    if !read_frame(source, &handle, frame_number) {
      return false;
    }
  }

  close_file(source, handle)
}

/// Opens the file at the given path and reads frames `1..=frame_count` from
/// it, with each frame read on its own thread. All threads share the one open
/// handle.
///
/// Once every read has completed the file is closed, regardless of whether
/// the reads succeeded. Returns whether all reads and the close succeeded. A
/// read thread that panics or can't be started counts as a failed read.
///
pub fn read_frames_concurrent<S: FrameSource>(
  source: &S,
  path: &Path,
  frame_count: usize,
) -> bool {
  let Some(handle) = open_file(source, path) else {
    return false;
  };

  let shared_handle = &handle;

  // All read threads are joined before the scope ends, so the handle is never
  // closed while a read is in progress
  let reads_succeeded = std::thread::scope(|scope| {
    let reads: Vec<_> = (1..=frame_count)
      .map(|frame_number| {
        std::thread::Builder::new()
          .name(format!("read-frame-{frame_number}"))
          .spawn_scoped(scope, move || {
            read_frame(source, shared_handle, frame_number)
          })
      })
      .collect();

    reads.into_iter().fold(true, |succeeded, read| {
      let read_succeeded = match read {
        Ok(thread) => thread.join().unwrap_or(false),

        Err(e) => {
          log::error!("Unable to start frame read thread: {e}");
          false
        }
      };

      succeeded && read_succeeded
    })
  });

  let closed = close_file(source, handle);

  log::info!("Done");

  reads_succeeded && closed
}

/// Logs each line of text that describes an error.
///
fn log_error(error: &FrameError, task_description: &str) {
  for line in error.to_lines(task_description) {
    if !line.is_empty() {
      log::error!("{line}");
    }
  }
}
