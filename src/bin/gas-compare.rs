//! Compare gas snapshot results with a previous commit.
//!
//! Reads every snapshot in a directory, diffs each against its content at a
//! baseline commit (the checked-out commit by default, `COMPARE_GIT_SHA` to
//! override), prints a markdown table sorted by delta, and exits non-zero
//! when the worst regression exceeds the failure threshold.

use anyhow::{Context, Result};
use clap::Parser;
use gas_report::fmt::{CHART, CHECKMARK, CROSSMARK};
use gas_report::git::{GitRepository, COMPARE_SHA_ENV};
use gas_report::report::commit::{extremes, render_table, CommitComparer};
use gas_report::report::delta::{evaluate_gate, FAIL_THRESHOLD_PERCENT};
use gas_report::report::severity::Severity;
use gas_report::snapshot::SNAPSHOT_DIR;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gas-compare")]
#[command(about = "Compare gas snapshot results with a previous commit")]
#[command(version)]
struct Cli {
    /// Snapshot directory, relative to the repository root
    #[arg(default_value = SNAPSHOT_DIR)]
    dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let commit = match std::env::var(COMPARE_SHA_ENV) {
        Ok(sha) if !sha.is_empty() => sha,
        _ => GitRepository::new()
            .head_commit()
            .context("Failed to resolve the baseline commit")?,
    };

    let comparer = CommitComparer::new(cli.dir, commit);
    let rows = comparer.collect()?;

    println!("{} Gas comparison against {:.10}\n", CHART, comparer.commit());
    println!("{}", render_table(&rows));

    let outcome = evaluate_gate(extremes(&rows).as_ref());

    if outcome.improvement {
        println!(
            "\n{} {}",
            CHECKMARK,
            Severity::StrongImprovement.paint(&format!(
                "\tGas usage improved by more than {:.0}%. Well done.\t",
                FAIL_THRESHOLD_PERCENT
            ))
        );
    }

    if outcome.regression {
        println!(
            "\n{} {}",
            CROSSMARK,
            Severity::Regression.paint(&format!(
                "\tGas regression exceeds the {:.0}% threshold.\t",
                FAIL_THRESHOLD_PERCENT
            ))
        );
        process::exit(1);
    }

    Ok(())
}
