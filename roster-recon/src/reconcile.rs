//! Per-line reconciliation of the README against the declared mapping.
//!
//! [`reconcile`] is a pure transform: raw input + mapping in, rewritten
//! content + accounting out. The first structural error aborts the whole run
//! with no partial result; a row whose agent lacks a mapping entry is
//! tallied and left untouched.

use std::collections::BTreeMap;

use roster_core::types::{AgentName, ModelMapping, ModelName};

use crate::error::ReconError;
use crate::row::{parse_table_row, LineEnding};

/// Skip-tally key for a data row whose agent has no mapping entry.
pub const SKIP_MISSING_AGENT: &str = "missing_agent";

/// What happened to one line.
enum RowAction {
    /// Not a data row, or a data row already in sync — emit the original bytes.
    Passthrough,
    /// Data row whose agent is absent from the mapping.
    Skipped(&'static str),
    /// Data row rewritten with the declared model.
    Rewritten(String),
}

/// Outcome of a reconcile run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Final document content, rewritten rows interleaved with untouched lines.
    pub content: String,
    /// Number of model cells rewritten.
    pub changes: usize,
    /// Rows left alone, tallied by reason.
    pub skipped: BTreeMap<&'static str, usize>,
}

impl Reconciliation {
    pub fn changed(&self) -> bool {
        self.changes > 0
    }
}

/// Reconcile `input` against `mapping`.
///
/// Every line that is not a well-formed data row passes through
/// byte-identical, line ending included. A rewritten row is reassembled from
/// its trimmed segments with the declared model in the value cell and the
/// original ending reattached.
pub fn reconcile(input: &str, mapping: &ModelMapping) -> Result<Reconciliation, ReconError> {
    let mut content = String::with_capacity(input.len());
    let mut changes = 0usize;
    let mut skipped: BTreeMap<&'static str, usize> = BTreeMap::new();

    for raw in input.split_inclusive('\n') {
        match reconcile_line(raw, mapping)? {
            RowAction::Passthrough => content.push_str(raw),
            RowAction::Skipped(reason) => {
                *skipped.entry(reason).or_insert(0) += 1;
                content.push_str(raw);
            }
            RowAction::Rewritten(line) => {
                changes += 1;
                content.push_str(&line);
            }
        }
    }

    Ok(Reconciliation {
        content,
        changes,
        skipped,
    })
}

fn reconcile_line(raw: &str, mapping: &ModelMapping) -> Result<RowAction, ReconError> {
    let (body, ending) = LineEnding::split(raw);
    let Some(mut row) = parse_table_row(body)? else {
        return Ok(RowAction::Passthrough);
    };

    let key = AgentName::from(row.agent.agent_key());
    let Some(model) = mapping.get(&key) else {
        tracing::debug!("no mapping entry for '{key}'");
        return Ok(RowAction::Skipped(SKIP_MISSING_AGENT));
    };

    let desired = format!(" {model} ");
    if row.segments[2] == desired {
        return Ok(RowAction::Passthrough);
    }

    tracing::debug!("rewriting model cell for '{key}': {:?} -> {desired:?}", row.segments[2]);
    row.segments[2] = desired;
    Ok(RowAction::Rewritten(format!(
        "{}{}",
        row.segments.join("|"),
        ending.as_str()
    )))
}

/// Read-only extraction of the current model cell for every data row.
///
/// Same grammar and fatal policy as [`reconcile`]. A duplicate agent key
/// keeps the last row's value.
pub fn scan_models(input: &str) -> Result<BTreeMap<AgentName, ModelName>, ReconError> {
    let mut listed = BTreeMap::new();
    for line in input.lines() {
        if let Some(row) = parse_table_row(line)? {
            listed.insert(
                AgentName::from(row.agent.agent_key()),
                ModelName::from(row.segments[2].trim()),
            );
        }
    }
    Ok(listed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, &str)]) -> ModelMapping {
        entries
            .iter()
            .map(|(agent, model)| (AgentName::from(*agent), ModelName::from(*model)))
            .collect()
    }

    #[test]
    fn divergent_cell_is_rewritten() {
        let m = mapping(&[("alpha", "model-x")]);
        let out = reconcile("| [Alpha](alpha.md) | model-y | desc |\n", &m).expect("reconcile");
        assert_eq!(out.content, "| [Alpha](alpha.md) | model-x | desc |\n");
        assert_eq!(out.changes, 1);
        assert!(out.changed());
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn matching_cell_passes_through_byte_identical() {
        let m = mapping(&[("alpha", "model-x")]);
        let input = "  | [Alpha](alpha.md) | model-x | desc |\r\n";
        let out = reconcile(input, &m).expect("reconcile");
        assert_eq!(out.content, input);
        assert_eq!(out.changes, 0);
    }

    #[test]
    fn missing_agent_is_tallied_and_untouched() {
        let m = mapping(&[("alpha", "model-x")]);
        let input = "| [Beta](beta.md) | model-y | desc |\n";
        let out = reconcile(input, &m).expect("reconcile");
        assert_eq!(out.content, input);
        assert_eq!(out.changes, 0);
        assert_eq!(out.skipped.get(SKIP_MISSING_AGENT), Some(&1));
    }

    #[test]
    fn rewrite_preserves_crlf_ending() {
        let m = mapping(&[("alpha", "model-x")]);
        let out = reconcile("| [Alpha](alpha.md) | model-y | desc |\r\n", &m).expect("reconcile");
        assert_eq!(out.content, "| [Alpha](alpha.md) | model-x | desc |\r\n");
    }

    #[test]
    fn rewrite_preserves_missing_final_newline() {
        let m = mapping(&[("alpha", "model-x")]);
        let out = reconcile("| [Alpha](alpha.md) | model-y | desc |", &m).expect("reconcile");
        assert_eq!(out.content, "| [Alpha](alpha.md) | model-x | desc |");
    }

    #[test]
    fn structural_error_aborts_the_whole_run() {
        let m = mapping(&[("alpha", "model-x")]);
        let input = "| [Alpha](alpha.md) | model-y | desc |\n| [Broken] (broken.md) | m | d |\n";
        let err = reconcile(input, &m).unwrap_err();
        assert!(matches!(err, ReconError::MalformedAgentCell { .. }), "got: {err}");
    }

    #[test]
    fn wrong_extension_aborts_the_whole_run() {
        let m = mapping(&[("gamma", "model-z")]);
        let err = reconcile("| [Gamma](gamma.txt) | model-z | desc |\n", &m).unwrap_err();
        assert!(matches!(err, ReconError::NotMarkdownRef { .. }), "got: {err}");
    }

    #[test]
    fn empty_input_reconciles_to_empty_output() {
        let out = reconcile("", &ModelMapping::new()).expect("reconcile");
        assert_eq!(out.content, "");
        assert_eq!(out.changes, 0);
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn scan_models_reads_cells_without_rewriting() {
        let input = "| [Alpha](alpha.md) | model-y | desc |\n| [Beta](beta.md) | model-z | desc |\n";
        let listed = scan_models(input).expect("scan");
        assert_eq!(listed.get(&AgentName::from("alpha")), Some(&ModelName::from("model-y")));
        assert_eq!(listed.get(&AgentName::from("beta")), Some(&ModelName::from("model-z")));
    }

    #[test]
    fn scan_models_keeps_last_duplicate_row() {
        let input = "| [Alpha](alpha.md) | first | d |\n| [Alpha](alpha.md) | second | d |\n";
        let listed = scan_models(input).expect("scan");
        assert_eq!(listed.get(&AgentName::from("alpha")), Some(&ModelName::from("second")));
    }
}
