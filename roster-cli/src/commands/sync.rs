//! `roster sync` — rewrite divergent model cells in the README.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use roster_core::{mapping, RepoLayout};
use roster_recon::{reconcile, writer::atomic_write, Reconciliation, WriteResult};

/// Arguments for `roster sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Repository root containing the agent files and README.md.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Show what would be written without touching the README.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let layout = RepoLayout::at(&self.root);

        let mapping = mapping::load_mapping_at(&layout)
            .context("failed to load agent model declarations")?;
        if mapping.is_empty() {
            bail!(
                "no agent model declarations found under {}",
                layout.root.display()
            );
        }

        let readme = std::fs::read_to_string(&layout.readme)
            .with_context(|| format!("failed to read {}", layout.readme.display()))?;
        let outcome = reconcile(&readme, &mapping).context("README table reconciliation failed")?;

        if outcome.changed() {
            let result = atomic_write(&layout.readme, &outcome.content, self.dry_run)
                .with_context(|| format!("failed to write {}", layout.readme.display()))?;
            print_write(&result, &outcome);
        } else {
            println!(
                "{} {} already matches agent model declarations",
                "✓".green(),
                layout.readme.display()
            );
        }

        print_skips(&outcome);
        Ok(())
    }
}

fn print_write(result: &WriteResult, outcome: &Reconciliation) {
    match result {
        WriteResult::Written { path } => println!(
            "{} {}: {} model cell(s) updated",
            "✎".green(),
            path.display(),
            outcome.changes
        ),
        WriteResult::WouldWrite { path } => println!(
            "[dry-run] {} {}: {} model cell(s) would change",
            "~".yellow(),
            path.display(),
            outcome.changes
        ),
        WriteResult::Unchanged { path } => println!(
            "{} {} already matches on disk",
            "·".bright_black(),
            path.display()
        ),
    }
}

fn print_skips(outcome: &Reconciliation) {
    if outcome.skipped.is_empty() {
        return;
    }
    let summary = outcome
        .skipped
        .iter()
        .map(|(reason, count)| format!("{reason}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    eprintln!("{} skipped rows -> {summary}", "warning:".yellow().bold());
}
