mod utils;

use std::path::PathBuf;

use dcmfx_frames_test_utils::{create_temp_dir, frame_data, write_dicom_file};
use predicates::prelude::*;
use tempfile::TempDir;
use utils::{dcmfx_frames, get_stdout};

fn write_frames(dir: &TempDir, frame_count: usize) -> PathBuf {
  let path = dir.path().join(format!("valid_{frame_count}frame.dcm"));

  let frames: Vec<_> = (0..frame_count)
    .map(|i| frame_data(2, 3, i as u8))
    .collect();
  write_dicom_file(&path, 2, 3, &frames);

  path
}

#[test]
fn sequential() {
  let dir = create_temp_dir();
  let path = write_frames(&dir, 2);

  let assert = dcmfx_frames()
    .arg(&path)
    .arg("--mode")
    .arg("sequential")
    .assert()
    .success();

  assert_eq!(
    get_stdout(assert),
    format!(
      "Opening \"{0}\" …
Opened \"{0}\", frames: 2, transfer syntax: Explicit VR Little Endian
Reading frame 1 …
Read frame 1, size: 6 bytes
Releasing frame 1
Reading frame 2 …
Read frame 2, size: 6 bytes
Releasing frame 2
Closing file …
File closed
",
      path.display()
    )
  );
}

#[test]
fn sequential_with_single_frame_file() {
  let dir = create_temp_dir();
  let path = write_frames(&dir, 1);

  let stdout = get_stdout(
    dcmfx_frames()
      .arg(&path)
      .arg("--mode")
      .arg("sequential")
      .assert()
      .success(),
  );

  assert!(stdout.contains("Frame error reading frame 2"));
  assert!(!stdout.contains("Closing file"));
  assert!(stdout.ends_with("Reading frames sequentially failed\n"));
}

#[test]
fn concurrent() {
  let dir = create_temp_dir();
  let path = write_frames(&dir, 4);

  let stdout = get_stdout(
    dcmfx_frames()
      .arg(&path)
      .arg("--mode")
      .arg("concurrent")
      .arg("--frame-count")
      .arg("4")
      .assert()
      .success(),
  );

  for frame_number in 1..=4 {
    assert!(stdout.contains(&format!("Read frame {frame_number}, size: 6")));
    assert!(stdout.contains(&format!("Releasing frame {frame_number}\n")));
  }

  assert_eq!(stdout.matches("File closed").count(), 1);
  assert!(stdout.ends_with("Closing file …\nFile closed\nDone\n"));
}

#[test]
fn concurrent_with_missing_frame_still_closes() {
  let dir = create_temp_dir();
  let path = write_frames(&dir, 2);

  let stdout = get_stdout(
    dcmfx_frames()
      .arg(&path)
      .arg("--mode")
      .arg("concurrent")
      .arg("-n")
      .arg("3")
      .assert()
      .success(),
  );

  assert!(stdout.contains("Frame error reading frame 3"));
  assert_eq!(stdout.matches("File closed").count(), 1);
  assert!(stdout.ends_with("Done\nReading frames concurrently failed\n"));
}

#[test]
fn both_modes() {
  let dir = create_temp_dir();
  let path = write_frames(&dir, 2);

  let stdout = get_stdout(dcmfx_frames().arg(&path).assert().success());

  assert_eq!(stdout.matches("Opening").count(), 2);
  assert_eq!(stdout.matches("File closed").count(), 2);
  assert!(!stdout.contains("failed"));
}

#[test]
fn missing_file_exits_successfully() {
  let dir = create_temp_dir();
  let path = dir.path().join("missing.dcm");

  let stdout = get_stdout(dcmfx_frames().arg(&path).assert().success());

  assert!(stdout.contains("Frame error opening"));
  assert!(!stdout.contains("Reading frame 1"));
  assert!(!stdout.contains("Closing file"));
  assert!(stdout.contains("Reading frames sequentially failed\n"));
  assert!(stdout.ends_with("Reading frames concurrently failed\n"));
}

#[test]
fn quiet_log_level() {
  let dir = create_temp_dir();
  let path = write_frames(&dir, 2);

  dcmfx_frames()
    .env("RUST_LOG", "off")
    .arg(&path)
    .assert()
    .success()
    .stdout("");
}

#[test]
fn print_stats() {
  let dir = create_temp_dir();
  let path = write_frames(&dir, 2);

  dcmfx_frames()
    .arg(&path)
    .arg("--print-stats")
    .assert()
    .success()
    .stderr(predicate::str::contains("Time elapsed:"));
}

#[test]
fn invalid_frame_count() {
  dcmfx_frames()
    .arg("--frame-count")
    .arg("0")
    .assert()
    .failure()
    .stderr(predicate::str::contains("--frame-count"));
}

#[test]
fn invalid_mode() {
  dcmfx_frames()
    .arg("--mode")
    .arg("parallel")
    .assert()
    .failure()
    .stderr(predicate::str::contains("parallel"));
}
