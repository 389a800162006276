//! CLI entry point for the `pddlcheck` tool.
//!
//! Reads a domain and/or problem file, runs the matching parser and
//! reports the outcome. Exits 0 when everything parsed, 1 otherwise.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

#[derive(Parser, Debug)]
#[command(name = "pddlcheck")]
#[command(about = "Check PDDL domain and problem files for syntax and semantic errors")]
struct Args {
    /// The path to the domain file
    #[arg(long = "domain")]
    domain: Option<PathBuf>,

    /// The path to the problem file
    #[arg(long = "problem")]
    problem: Option<PathBuf>,
}

fn check<T>(
    what: &str,
    path: &PathBuf,
    parse: impl Fn(&str) -> Result<pddlcheck::Parsed<T>, pddlcheck::PddlError>,
) -> bool {
    let src = match fs::read_to_string(path) {
        Ok(src) => src,
        Err(e) => {
            eprintln!("Can't read {} file {}: {e}", what, path.display());
            return false;
        }
    };
    match parse(&src) {
        Ok(parsed) => {
            for warning in parsed.warnings() {
                warn!("{warning}");
            }
            println!("Successfully parsed {what} {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("Failed to parse {what}:\n{e}\n{}", e.context(&src));
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut success = true;
    if let Some(path) = &args.domain {
        success &= check("domain", path, pddlcheck::parse_domain);
    }
    if let Some(path) = &args.problem {
        success &= check("problem", path, pddlcheck::parse_problem);
    }
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
