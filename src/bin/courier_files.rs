use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use courier::{RunMode, init_logging, run_from_env};
use dotenv::dotenv;

/// Courier (files only) - uploads the given files as documents to a Telegram chat
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
    dotenv().ok();

    let args = Args::parse();
    init_logging();

    let files: Vec<PathBuf> = args.files.into_iter().map(PathBuf::from).collect();
    let mut stdout = std::io::stdout();
    run_from_env(&files, RunMode::FilesOnly, &mut stdout).await.into()
}
