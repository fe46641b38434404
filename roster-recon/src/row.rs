//! Row grammar for README agent tables.
//!
//! A data row is `| [Label](agent.md) | model | description |`, which splits
//! on `|` into exactly five segments: the empty leading and trailing boundary
//! segments plus the three cells. Anything that does not match the shape
//! passes through untouched; only a first cell that looks link-shaped but
//! fails the strict grammar is fatal.

use std::path::Path;

use crate::error::ReconError;

/// Number of pipe-delimited segments a well-formed data row splits into.
pub(crate) const DATA_ROW_SEGMENTS: usize = 5;

/// Extension an agent link must reference.
pub const AGENT_LINK_EXT: &str = ".md";

// ---------------------------------------------------------------------------
// Line endings
// ---------------------------------------------------------------------------

/// Line-ending style of one raw line, captured verbatim so it can be
/// reattached on rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Final line of a file with no trailing newline.
    None,
    Lf,
    CrLf,
}

impl LineEnding {
    /// Split `raw` into its body and captured ending.
    pub fn split(raw: &str) -> (&str, LineEnding) {
        if let Some(body) = raw.strip_suffix("\r\n") {
            (body, LineEnding::CrLf)
        } else if let Some(body) = raw.strip_suffix('\n') {
            (body, LineEnding::Lf)
        } else {
            (raw, LineEnding::None)
        }
    }

    /// The ending as the exact bytes to reattach.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::None => "",
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

// ---------------------------------------------------------------------------
// Agent references
// ---------------------------------------------------------------------------

/// A `[label](path)` reference from the first cell of a data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRef {
    pub label: String,
    pub path: String,
}

impl AgentRef {
    /// Lookup key into the declared mapping: the path's file stem.
    pub fn agent_key(&self) -> String {
        Path::new(&self.path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.clone())
    }
}

/// Strict `[label](path)` grammar: a non-empty label in square brackets
/// immediately followed by a non-empty path in parentheses, nothing else.
fn parse_agent_link(cell: &str) -> Option<AgentRef> {
    let rest = cell.strip_prefix('[')?;
    let (label, rest) = rest.split_once(']')?;
    if label.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix('(')?;
    let path = rest.strip_suffix(')')?;
    if path.is_empty() || path.contains(')') {
        return None;
    }
    Some(AgentRef {
        label: label.to_string(),
        path: path.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Row classification
// ---------------------------------------------------------------------------

/// Parsed view of one data row: the agent reference plus the raw segments
/// of the trimmed line. Derived per line, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub agent: AgentRef,
    pub segments: Vec<String>,
}

/// Classify a line (ending already stripped) against the data-row grammar.
///
/// Returns `Ok(None)` for anything that is not a data row: prose, blank
/// lines, header rows, separator rows (their first cell is dashes, not a
/// link), and rows with unexpected segment counts. Errors only on a first
/// cell that contains brackets but fails [`parse_agent_link`], or on a link
/// that does not reference a markdown file.
pub fn parse_table_row(line: &str) -> Result<Option<TableRow>, ReconError> {
    let stripped = line.trim();
    if !stripped.starts_with('|') {
        return Ok(None);
    }

    let segments: Vec<&str> = stripped.split('|').collect();
    if segments.len() != DATA_ROW_SEGMENTS {
        return Ok(None);
    }

    let agent_cell = segments[1].trim();
    if agent_cell.is_empty() || !agent_cell.contains('[') || !agent_cell.contains(']') {
        return Ok(None);
    }

    let Some(agent) = parse_agent_link(agent_cell) else {
        return Err(ReconError::MalformedAgentCell {
            cell: agent_cell.to_string(),
        });
    };
    if !agent.path.ends_with(AGENT_LINK_EXT) {
        return Err(ReconError::NotMarkdownRef { path: agent.path });
    }

    Ok(Some(TableRow {
        agent,
        segments: segments.into_iter().map(str::to_string).collect(),
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
