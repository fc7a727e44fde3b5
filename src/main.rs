use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use courier::{RunMode, init_logging, run_from_env};
use dotenv::dotenv;

/// Courier - posts a UTC+8 build notice to a Telegram chat, then uploads the given files as documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Files to upload, in order. Taken verbatim: empty and dash-prefixed paths are still paths
    #[arg(
        value_name = "FILE",
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    files: Vec<OsString>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    let args = Args::parse();
    init_logging();

    let files: Vec<PathBuf> = args.files.into_iter().map(PathBuf::from).collect();
    let mut stdout = std::io::stdout();
    run_from_env(&files, RunMode::NoticeAndFiles, &mut stdout).await.into()
}
