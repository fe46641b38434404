//! Per-agent sync signals for `roster status`.
//!
//! Signal per agent, over the union of declared mapping keys and README rows:
//! 1. `Divergent` — row present, model cell differs from the declaration
//! 2. `Missing` — README row with no mapping entry
//! 3. `Unlisted` — mapping entry with no README row
//! 4. `InSync`

use std::collections::BTreeSet;

use roster_core::types::{AgentName, ModelMapping, ModelName};

use crate::error::ReconError;
use crate::reconcile::scan_models;

/// Sync classification for one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSignal {
    /// README model cell equals the declared model.
    InSync,
    /// Row present but the cell differs from the declaration.
    Divergent,
    /// README row references an agent with no mapping entry.
    Missing,
    /// Declared agent with no README row.
    Unlisted,
}

/// One agent's line in the status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStatus {
    pub agent: AgentName,
    /// Model declared in the agent file, if any.
    pub declared: Option<ModelName>,
    /// Model currently in the README row, if any (cell content, trimmed).
    pub listed: Option<ModelName>,
    pub signal: RosterSignal,
}

/// Classify every agent in the union of `mapping` keys and README rows.
///
/// Shares the reconciler's row grammar, so a structurally broken README is
/// fatal here too.
pub fn check(readme: &str, mapping: &ModelMapping) -> Result<Vec<AgentStatus>, ReconError> {
    let listed = scan_models(readme)?;

    let mut agents: BTreeSet<AgentName> = mapping.keys().cloned().collect();
    agents.extend(listed.keys().cloned());

    let mut report = Vec::new();
    for agent in agents {
        let declared = mapping.get(&agent).cloned();
        let current = listed.get(&agent).cloned();
        let signal = match (&declared, &current) {
            (Some(want), Some(have)) if want == have => RosterSignal::InSync,
            (Some(_), Some(_)) => RosterSignal::Divergent,
            (None, Some(_)) => RosterSignal::Missing,
            (Some(_), None) => RosterSignal::Unlisted,
            (None, None) => continue,
        };
        report.push(AgentStatus {
            agent,
            declared,
            listed: current,
            signal,
        });
    }
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
