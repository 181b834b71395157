//! photogate - normalize an uploaded photo on stdin into a JPEG on stdout.
//!
//! On success the JPEG is written to stdout and the process exits 0. On
//! failure stdout stays empty, a single diagnostic line goes to stderr, and
//! the exit status identifies the failure:
//!
//! | code | meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | success                                   |
//! | 1    | unreadable input, encoder or I/O failure  |
//! | 2    | `RESOLUTION_TOO_LOW`                      |
//! | 3    | `ENCODE_VERIFICATION_FAILED`              |

mod filter;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use filter::run_filter;

#[derive(Parser)]
#[command(name = "photogate", version)]
#[command(about = "Read an image on stdin, write an upright, UHD-bounded RGB JPEG to stdout")]
struct Args {
    /// Log each pipeline step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Without --verbose stderr carries nothing but the failure diagnostic
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }

    match run_filter(io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
