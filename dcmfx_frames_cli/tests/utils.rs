use assert_cmd::{
  cargo::cargo_bin_cmd,
  {Command, assert::Assert},
};

/// Returns a command that runs the CLI tool with log output at its default
/// level.
///
#[allow(dead_code)]
pub fn dcmfx_frames() -> Command {
  let mut cmd = cargo_bin_cmd!("dcmfx_frames");
  cmd.env_remove("RUST_LOG");

  cmd
}

#[allow(dead_code)]
pub fn get_stdout(assert: Assert) -> String {
  String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}
