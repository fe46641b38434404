//! `roster status` — per-agent sync visibility.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use roster_core::{mapping, RepoLayout};
use roster_recon::{status, AgentStatus, RosterSignal};

/// Arguments for `roster status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Repository root containing the agent files and README.md.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let layout = RepoLayout::at(&self.root);

        let mapping = mapping::load_mapping_at(&layout)
            .context("failed to load agent model declarations")?;
        let readme = std::fs::read_to_string(&layout.readme)
            .with_context(|| format!("failed to read {}", layout.readme.display()))?;
        let report = status::check(&readme, &mapping).context("README table scan failed")?;

        let divergent = report
            .iter()
            .filter(|r| r.signal == RosterSignal::Divergent)
            .count();

        if self.json {
            print_json(&report, divergent)?;
        } else {
            print_table(&report, divergent);
        }

        if divergent > 0 {
            bail!("{divergent} agent(s) out of sync; run `roster sync`");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct StatusReportJson {
    summary: StatusSummaryJson,
    agents: Vec<AgentStatusJson>,
}

#[derive(Serialize)]
struct StatusSummaryJson {
    agents: usize,
    divergent: usize,
}

#[derive(Serialize)]
struct AgentStatusJson {
    agent: String,
    status: String,
    declared_model: Option<String>,
    readme_model: Option<String>,
}

fn print_json(report: &[AgentStatus], divergent: usize) -> Result<()> {
    let payload = StatusReportJson {
        summary: StatusSummaryJson {
            agents: report.len(),
            divergent,
        },
        agents: report
            .iter()
            .map(|row| AgentStatusJson {
                agent: row.agent.to_string(),
                status: signal_key(&row.signal).to_string(),
                declared_model: row.declared.as_ref().map(ToString::to_string),
                readme_model: row.listed.as_ref().map(ToString::to_string),
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Table output
// ---------------------------------------------------------------------------

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "agent")]
    agent: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "declared model")]
    declared: String,
    #[tabled(rename = "README model")]
    readme: String,
}

fn print_table(report: &[AgentStatus], divergent: usize) {
    println!(
        "roster v{} | {} agents | {} divergent",
        env!("CARGO_PKG_VERSION"),
        report.len(),
        divergent,
    );

    if report.is_empty() {
        println!("No agents declared and none listed in the README.");
        return;
    }

    println!(
        "Indicators: {} IN SYNC  {} DIVERGENT  {} MISSING AGENT  {} UNLISTED",
        signal_indicator(&RosterSignal::InSync),
        signal_indicator(&RosterSignal::Divergent),
        signal_indicator(&RosterSignal::Missing),
        signal_indicator(&RosterSignal::Unlisted),
    );

    let rows: Vec<StatusTableRow> = report
        .iter()
        .map(|row| StatusTableRow {
            agent: row.agent.to_string(),
            status: format!(
                "{} {}",
                signal_indicator(&row.signal),
                signal_label(&row.signal)
            ),
            declared: row
                .declared
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "—".to_string()),
            readme: row
                .listed
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "—".to_string()),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if divergent > 0 {
        println!("Run 'roster sync' to update divergent rows.");
    }
}

fn signal_key(signal: &RosterSignal) -> &'static str {
    match signal {
        RosterSignal::InSync => "in_sync",
        RosterSignal::Divergent => "divergent",
        RosterSignal::Missing => "missing_agent",
        RosterSignal::Unlisted => "unlisted",
    }
}

fn signal_label(signal: &RosterSignal) -> &'static str {
    match signal {
        RosterSignal::InSync => "IN SYNC",
        RosterSignal::Divergent => "DIVERGENT",
        RosterSignal::Missing => "MISSING AGENT",
        RosterSignal::Unlisted => "UNLISTED",
    }
}

fn signal_indicator(signal: &RosterSignal) -> String {
    match signal {
        RosterSignal::InSync => "■".green().bold().to_string(),
        RosterSignal::Divergent => "■".red().bold().to_string(),
        RosterSignal::Missing => "■".yellow().bold().to_string(),
        RosterSignal::Unlisted => "■".magenta().bold().to_string(),
    }
}
