// vidsnap-cli/src/main.rs
//
// Entry point for the `vidsnap` binary.
//
// Responsibilities:
// - Parsing arguments (help and version exit 0, any other usage error exits 1).
// - Initialising the logger from the --silent/--debug flags.
// - Running the snapshot job and printing the produced paths in silent mode.
// - Mapping fatal errors to "Error: <message>" on stderr and exit status 1.

use clap::Parser;
use clap::error::ErrorKind;
use std::process;

use vidsnap_cli::{Cli, init_logger, run_snapshot};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    init_logger(cli.silent, cli.debug);

    match run_snapshot(&cli) {
        Ok(report) => {
            if cli.silent {
                println!("{}", report.silent_output());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
