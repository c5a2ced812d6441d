use clap::ValueEnum;

/// The ways of reading frames that can be selected on the command line.
///
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum ReadMode {
  /// Opens the file and reads frames 1 and 2 one after another, then closes
  /// it. The file is left unclosed if a read fails.
  Sequential,

  /// Opens the file, reads each frame on its own thread, waits for all reads
  /// to complete, then closes it.
  Concurrent,

  /// Performs a sequential read followed by a concurrent read.
  Both,
}

impl ReadMode {
  /// Returns whether a sequential read should be performed.
  ///
  pub fn is_sequential(&self) -> bool {
    matches!(self, Self::Sequential | Self::Both)
  }

  /// Returns whether a concurrent read should be performed.
  ///
  pub fn is_concurrent(&self) -> bool {
    matches!(self, Self::Concurrent | Self::Both)
  }
}

impl core::fmt::Display for ReadMode {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Sequential => write!(f, "sequential"),
      Self::Concurrent => write!(f, "concurrent"),
      Self::Both => write!(f, "both"),
    }
  }
}
