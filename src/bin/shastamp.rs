//! Git revision header stamper (shastamp) - Main binary entry point

use shastamp::cli::args::{Command, StampArgs, parse_args};
use shastamp::{Error, StampOptions, StampOutcome, SystemRunner};
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug shastamp build/sha1.h
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = match &cli_args.command {
        Command::Help => {
            print_help();
            0
        }
        Command::Version => {
            print_version();
            0
        }
        Command::Stamp(stamp_args) => handle_stamp(stamp_args),
    };

    process::exit(exit_code);
}

fn handle_stamp(args: &StampArgs) -> i32 {
    let opts = StampOptions::new(&args.output).with_env_overrides();

    match shastamp::stamp_header(&SystemRunner::new(), &opts) {
        Ok(StampOutcome::Unchanged) => {
            println!("Sha1 has not changed");
            0
        }
        Ok(StampOutcome::Written) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                Error::Launch { .. } | Error::CommandFailed { .. } | Error::InvalidOutput { .. } => {
                    3
                }
                Error::Io(_) => 4,
            }
        }
    }
}

fn print_help() {
    println!("shastamp - Stamp the current git revision into a C header");
    println!();
    println!("USAGE:");
    println!("    shastamp <OUTPUT_FILE>");
    println!();
    println!("The header is rewritten only when HEAD differs from the sha1 recorded");
    println!("on its first line, so dependents are not rebuilt needlessly.");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    SHASTAMP_GIT               git executable to run (default: git)");
    println!("    RUST_LOG                   Log filter, e.g. debug");
    println!();
    println!("EXAMPLES:");
    println!("    shastamp build/generated/sha1.h");
    println!("    RUST_LOG=debug shastamp sha1.h");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("shastamp {VERSION}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
