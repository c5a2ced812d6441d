//! Errors that occur when opening files and reading frames of pixel data.

use std::path::{Path, PathBuf};

use dcmfx::core::DcmfxError;

/// Occurs when a file can't be opened or a frame can't be read from it. Every
/// error carries a short summary of what went wrong, and a longer message with
/// the details reported by the frame source.
///
#[derive(Clone, Debug, PartialEq)]
pub enum FrameError {
  /// The file couldn't be opened, e.g. because it doesn't exist or doesn't
  /// contain valid DICOM P10 data with pixel data.
  Open {
    path: PathBuf,
    summary: String,
    message: String,
  },

  /// The frame with the given 1-based number couldn't be read from an open
  /// file.
  ReadFrame {
    frame_number: usize,
    summary: String,
    message: String,
  },
}

impl FrameError {
  /// Creates a new error for a file that couldn't be opened.
  ///
  pub fn open(
    path: &Path,
    summary: impl Into<String>,
    message: impl Into<String>,
  ) -> Self {
    Self::Open {
      path: path.to_path_buf(),
      summary: summary.into(),
      message: message.into(),
    }
  }

  /// Creates a new error for a frame that couldn't be read.
  ///
  pub fn read_frame(
    frame_number: usize,
    summary: impl Into<String>,
    message: impl Into<String>,
  ) -> Self {
    Self::ReadFrame {
      frame_number,
      summary: summary.into(),
      message: message.into(),
    }
  }

  /// Creates a new error for a file that couldn't be opened from the lines of
  /// text that describe an error returned by DCMfx.
  ///
  pub fn open_from_dcmfx_lines(path: &Path, lines: &[String]) -> Self {
    let (summary, message) = split_error_lines(lines);

    Self::open(path, summary, message)
  }

  /// A short summary of the error.
  ///
  pub fn summary(&self) -> &str {
    match self {
      Self::Open { summary, .. } | Self::ReadFrame { summary, .. } => summary,
    }
  }

  /// The full details of the error. This may span multiple lines.
  ///
  pub fn message(&self) -> &str {
    match self {
      Self::Open { message, .. } | Self::ReadFrame { message, .. } => message,
    }
  }
}

/// Splits the lines that describe a DCMfx error into a summary, which is its
/// first non-empty line, and a message made up of the remaining non-empty
/// lines.
///
fn split_error_lines(lines: &[String]) -> (String, String) {
  let mut lines = lines.iter().map(|s| s.trim()).filter(|s| !s.is_empty());

  let summary = lines.next().unwrap_or_default().to_string();
  let message = lines.collect::<Vec<_>>().join("\n");

  (summary, message)
}

impl core::fmt::Display for FrameError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::Open { path, summary, .. } => {
        write!(f, "Error opening \"{}\": {}", path.display(), summary)
      }

      Self::ReadFrame {
        frame_number,
        summary,
        ..
      } => write!(f, "Error reading frame {frame_number}: {summary}"),
    }
  }
}

impl std::error::Error for FrameError {}

impl DcmfxError for FrameError {
  /// Returns lines of text that describe a frame error in a human-readable
  /// format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![];

    lines.push(format!("Frame error {task_description}"));
    lines.push("".to_string());

    match self {
      Self::Open { path, .. } => {
        lines.push(format!("  Path: {}", path.display()));
      }
      Self::ReadFrame { frame_number, .. } => {
        lines.push(format!("  Frame: {frame_number}"));
      }
    }

    lines.push(format!("  Summary: {}", self.summary()));

    for line in self.message().lines() {
      lines.push(format!("  Details: {line}"));
    }

    lines
  }
}
