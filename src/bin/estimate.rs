use anyhow::Context;
use clap::Parser;
use name_syllables::utils::logger;
use name_syllables::{estimate_syllables, normalize_name, run_calibration, REFERENCE_CASES};
use std::io::BufRead;

#[derive(Parser)]
#[command(name = "estimate")]
#[command(about = "Print the estimated syllable count for each name")]
struct Args {
    /// Names to estimate; read one name per line from stdin when empty
    names: Vec<String>,

    /// Also print the normalized form of each name
    #[arg(short, long)]
    normalized: bool,

    /// Print the reference name check and exit
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_estimate(name: &str, normalized: bool) {
    let syllables = estimate_syllables(name);
    if normalized {
        println!("{}\t{}\t{}", name, normalize_name(name), syllables);
    } else {
        println!("{}\t{}", name, syllables);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    if args.check {
        let report = run_calibration(REFERENCE_CASES);
        println!("{}", report.render());
        return Ok(());
    }

    if !args.names.is_empty() {
        for name in &args.names {
            print_estimate(name, args.normalized);
        }
        return Ok(());
    }

    tracing::debug!("Reading names from stdin");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read name from stdin")?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        print_estimate(name, args.normalized);
    }

    Ok(())
}
