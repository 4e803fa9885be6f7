mod cli;
mod error;
mod paths;
mod platform;

use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use crate::error::PipconfError;
use crate::platform::PlatformProfile;

#[derive(Parser, Debug)]
#[command(name = cli::PROGRAM)]
#[command(about = "Keep named versions of the pip config file", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Command followed by its VERSION, if any
    #[arg(raw = true)]
    args: Vec<OsString>,
}

impl Cli {
    /// Parse a full argv, program name first
    ///
    /// A `--` is inserted after the program name so clap takes every user
    /// token as a value, including `--` itself and non UTF-8 input.
    fn from_argv(argv: impl IntoIterator<Item = OsString>) -> Self {
        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_else(|| OsString::from(cli::PROGRAM));
        let escaped = [program, OsString::from("--")].into_iter().chain(argv);
        Cli::parse_from(escaped)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::from_argv(env::args_os());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cli::dispatch(
        &cli.args,
        || cli::Context::from_env(PlatformProfile::detect()),
        &mut out,
    )
    .and_then(|()| out.flush().map_err(PipconfError::from));
    drop(out);

    if let Err(e) = result {
        report(&e);
        let _ = io::stdout().flush();
        std::process::exit(e.exit_code());
    }
}

/// Usage errors get the usage text on stdout; everything else a one-line diagnostic
fn report(e: &PipconfError) {
    if e.is_usage() {
        print!("{}", cli::usage());
        if !matches!(e, PipconfError::MissingCommand) {
            eprintln!("ERROR: {}", e);
        }
    } else {
        eprintln!("Error: {}", e);
    }
}
