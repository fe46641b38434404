//! `roster diff` — show the unified diff of what sync would rewrite.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use roster_core::{mapping, RepoLayout};
use roster_recon::diff::diff_readme;

/// Arguments for `roster diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Repository root containing the agent files and README.md.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl DiffArgs {
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

        match diff_readme(&layout, &mapping).context("diff failed")? {
            None => println!("{} is up to date.", layout.readme.display()),
            Some(unified) => {
                print!("{unified}");
                if !unified.ends_with('\n') {
                    println!();
                }
            }
        }

        Ok(())
    }
}
