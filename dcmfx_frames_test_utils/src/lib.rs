//! Helpers for tests that need DICOM P10 files to read frames from.

use std::path::{Path, PathBuf};

use dcmfx::core::*;
use dcmfx::p10::*;
use tempfile::TempDir;

fn temp_dir() -> PathBuf {
  if let Ok(t) = std::env::var("RUNNER_TEMP") {
    PathBuf::from(t)
  } else {
    std::env::temp_dir()
  }
}

pub fn create_temp_dir() -> TempDir {
  TempDir::new_in(temp_dir()).unwrap()
}

/// Returns the content of a frame of 8-bit grayscale pixel data where every
/// pixel has the given value.
///
pub fn frame_data(rows: u16, columns: u16, value: u8) -> Vec<u8> {
  vec![value; usize::from(rows) * usize::from(columns)]
}

/// Writes a DICOM P10 file in the Explicit VR Little Endian transfer syntax
/// that holds the given frames of 8-bit grayscale native pixel data.
///
pub fn write_dicom_file(
  path: &Path,
  rows: u16,
  columns: u16,
  frames: &[Vec<u8>],
) {
  let mut pixel_data = frames.concat();
  if pixel_data.len() % 2 == 1 {
    pixel_data.push(0);
  }

  let values = [
    (
      dictionary::TRANSFER_SYNTAX_UID.tag,
      DataElementValue::new_unique_identifier(&["1.2.840.10008.1.2.1"]),
    ),
    (
      dictionary::SOP_CLASS_UID.tag,
      DataElementValue::new_unique_identifier(&["1.2.840.10008.5.1.4.1.1.7"]),
    ),
    (
      dictionary::SOP_INSTANCE_UID.tag,
      DataElementValue::new_unique_identifier(&["1.2.826.0.1.3680043.2.1"]),
    ),
    (
      dictionary::SAMPLES_PER_PIXEL.tag,
      DataElementValue::new_unsigned_short(&[1]),
    ),
    (
      dictionary::PHOTOMETRIC_INTERPRETATION.tag,
      DataElementValue::new_code_string(&["MONOCHROME2"]),
    ),
    (
      dictionary::NUMBER_OF_FRAMES.tag,
      DataElementValue::new_integer_string(&[frames.len() as i32]),
    ),
    (dictionary::ROWS.tag, DataElementValue::new_unsigned_short(&[rows])),
    (
      dictionary::COLUMNS.tag,
      DataElementValue::new_unsigned_short(&[columns]),
    ),
    (
      dictionary::BITS_ALLOCATED.tag,
      DataElementValue::new_unsigned_short(&[8]),
    ),
    (
      dictionary::BITS_STORED.tag,
      DataElementValue::new_unsigned_short(&[8]),
    ),
    (dictionary::HIGH_BIT.tag, DataElementValue::new_unsigned_short(&[7])),
    (
      dictionary::PIXEL_REPRESENTATION.tag,
      DataElementValue::new_unsigned_short(&[0]),
    ),
    (
      dictionary::PIXEL_DATA.tag,
      DataElementValue::new_other_byte_string(pixel_data),
    ),
  ];

  let mut data_set = DataSet::new();
  for (tag, value) in values {
    data_set.insert(tag, value.unwrap());
  }

  data_set.write_p10_file(path, None).unwrap();
}
