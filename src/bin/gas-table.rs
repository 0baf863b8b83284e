//! Render the fixed gas comparison tables.
//!
//! Each named comparison group becomes one markdown table, with the group's
//! first entry as the baseline for the percentage column. Tables print to
//! stdout and can additionally be spliced into the marked region of a
//! documentation file.

use anyhow::Result;
use clap::Parser;
use gas_report::docs::update_file;
use gas_report::infra::RealFileSystem;
use gas_report::report::groups::{render_catalogue, GroupMode};
use gas_report::snapshot::{SnapshotStore, SNAPSHOT_DIR};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gas-table")]
#[command(about = "Render gas comparison tables for the fixed report groups")]
#[command(version)]
struct Cli {
    /// Snapshot directory
    #[arg(default_value = SNAPSHOT_DIR)]
    dir: PathBuf,

    /// Splice the tables into the marked region of this file
    #[arg(long, value_name = "FILE")]
    update: Option<PathBuf>,

    /// Render gas-only tables, with N/A for missing snapshots
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let store = SnapshotStore::new(cli.dir);
    let mode = if cli.plain {
        GroupMode::Plain
    } else {
        GroupMode::Percentage
    };
    let tables = render_catalogue(&store, mode);

    println!("{}", tables);

    if let Some(path) = cli.update {
        update_file(&RealFileSystem, &path, &tables)?;
    }

    Ok(())
}
