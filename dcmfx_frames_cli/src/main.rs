//! Entry point for the DCMfx frames CLI tool.

mod read_mode;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use dcmfx_frames::{
  DcmfxFrameSource, read_frames_concurrent, read_frames_sequential,
};
use read_mode::ReadMode;

const DEFAULT_INPUT_FILENAME: &str = "/tmp/test_data/DCM_0.dcm";

#[derive(Parser)]
#[command(
  name = "dcmfx_frames",
  bin_name = "dcmfx_frames",
  version = env!("CARGO_PKG_VERSION"),
  about = "Reads frames of pixel data from a DICOM P10 file, one after \
    another and with one thread per frame",
  max_term_width = 80
)]
struct Cli {
  #[clap(
    help = "The name of the DICOM P10 file to read frames from.",
    default_value = DEFAULT_INPUT_FILENAME
  )]
  input_filename: PathBuf,

  #[arg(
    long,
    short,
    value_enum,
    help = "How to read the frames.",
    default_value_t = ReadMode::Both
  )]
  mode: ReadMode,

  #[arg(
    long,
    short = 'n',
    help = "The number of frames to read when reading concurrently. Frames \
      1 to N are each read on their own thread.",
    value_parser = clap::value_parser!(u32).range(1..=4096),
    default_value_t = 2
  )]
  frame_count: u32,

  #[arg(
    long,
    default_value_t = false,
    help = "Write timing and memory stats to stderr on exit"
  )]
  print_stats: bool,
}

fn main() {
  let cli = Cli::parse();

  init_logger();

  let started_at = std::time::Instant::now();

  if cli.mode.is_sequential()
    && !read_frames_sequential(&DcmfxFrameSource, &cli.input_filename)
  {
    println!("Reading frames sequentially failed");
  }

  if cli.mode.is_concurrent()
    && !read_frames_concurrent(
      &DcmfxFrameSource,
      &cli.input_filename,
      cli.frame_count as usize,
    )
  {
    println!("Reading frames concurrently failed");
  }

  if cli.print_stats {
    #[cfg(not(windows))]
    let peak_memory_mb = get_peak_memory_usage() as f64 / (1024.0 * 1024.0);

    eprintln!();
    eprintln!("-----");
    eprintln!(
      "Time elapsed:      {:.2} seconds",
      started_at.elapsed().as_secs_f64()
    );

    #[cfg(not(windows))]
    eprintln!("Peak memory usage: {:.0} MiB", peak_memory_mb);
  }
}

/// Sends log output to stdout as bare messages. The default level is `info`,
/// and can be changed with the `RUST_LOG` environment variable.
///
fn init_logger() {
  env_logger::Builder::new()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .target(env_logger::Target::Stdout)
    .format(|buf, record| writeln!(buf, "{}", record.args()))
    .init();
}

#[cfg(not(windows))]
fn get_peak_memory_usage() -> i64 {
  let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
  unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };

  let mut max = usage.ru_maxrss;

  // On Linux, ru_maxrss is in KiB
  if std::env::consts::OS == "linux" {
    max *= 1024;
  }

  max
}
