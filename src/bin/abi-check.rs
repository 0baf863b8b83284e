//! Validate VIP function shapes in a generated contract ABI.
//!
//! Every `*_VIP` function must lead with `(address recipient, PermitTransferFrom permit)`.
//! All violations are collected and reported in one message; any violation
//! fails the run.

use anyhow::Result;
use clap::Parser;
use gas_report::abi::{load_artifact, malformed_vips, DEFAULT_ARTIFACT_PATH};
use gas_report::infra::RealFileSystem;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "abi-check")]
#[command(about = "Validate VIP function shapes in a contract ABI artifact")]
#[command(version)]
struct Cli {
    /// Path to the generated interface artifact
    #[arg(default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let artifact = load_artifact(&RealFileSystem, &cli.artifact)?;
    let malformed = malformed_vips(&artifact.abi);

    if !malformed.is_empty() {
        eprintln!("Malformed VIP functions: {}", malformed.join(", "));
        process::exit(1);
    }

    Ok(())
}
