// Copyright 2026 Passtrack Contributors
// SPDX-License-Identifier: Apache-2.0

use clap::error::ErrorKind;
use clap::Parser;

use passtrack::{cli, portal};

#[derive(Parser)]
#[command(
    name = "passtrack",
    about = "Track an Indian passport application's status from the command line",
    version,
    after_help = "Prints the status table as a JSON object on stdout. \
                  All diagnostics go to stderr."
)]
struct Cli {
    /// Application file number, as printed on the acknowledgement letter
    file_no: String,

    /// Date of birth in DD/MM/YYYY format
    dob: String,

    /// Status-tracker endpoint (override when testing against a stub server)
    #[arg(long, default_value = portal::STATUS_ENDPOINT)]
    endpoint: String,

    /// HTTP timeout in milliseconds
    #[arg(long, default_value_t = 30_000)]
    timeout: u64,

    /// Enable verbose/debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    // Exit codes are part of the contract: 0 on success, 1 on any failure,
    // usage errors included. --help and --version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    if let Err(e) = cli::track_cmd::run(&cli.file_no, &cli.dob, &cli.endpoint, cli.timeout).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Initialize tracing to stderr; stdout is reserved for the JSON record.
fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "passtrack=debug"
    } else {
        "passtrack=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();
}
