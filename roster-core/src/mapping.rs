//! Agent model mapping loader.
//!
//! Scans the repo root for agent markdown files, reads the first `model:`
//! directive line of each, and folds the results into a [`ModelMapping`]
//! keyed by file stem. A file with no directive contributes nothing; two
//! files sharing a stem resolve later-wins in lexicographic path order.

use std::path::PathBuf;

use crate::error::{io_err, RosterError};
use crate::layout::{RepoLayout, AGENT_FILE_EXT};
use crate::types::{AgentName, ModelMapping, ModelName};

/// Directive prefix that declares an agent's model inside its markdown file.
pub const MODEL_DIRECTIVE: &str = "model:";

/// Load the declared mapping for the repo described by `layout`.
///
/// An empty mapping is a valid result; callers decide whether it is fatal.
pub fn load_mapping_at(layout: &RepoLayout) -> Result<ModelMapping, RosterError> {
    let paths = agent_files_at(layout)?;
    fold_mapping(&paths)
}

/// Agent markdown files directly under the repo root, exclusions applied,
/// sorted lexicographically by file name.
pub fn agent_files_at(layout: &RepoLayout) -> Result<Vec<PathBuf>, RosterError> {
    if !layout.root.is_dir() {
        return Err(RosterError::NotADirectory {
            path: layout.root.clone(),
        });
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(&layout.root)
        .map_err(|e| io_err(&layout.root, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().map(|ext| ext == AGENT_FILE_EXT).unwrap_or(false))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|name| !layout.is_excluded(name))
                .unwrap_or(false)
        })
        .collect();
    paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(paths)
}

/// Fold an ordered list of agent files into a mapping.
///
/// Later paths overwrite earlier ones on duplicate stems.
pub fn fold_mapping(paths: &[PathBuf]) -> Result<ModelMapping, RosterError> {
    let mut mapping = ModelMapping::new();
    for path in paths {
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        let Some(model) = first_directive_value(&contents) else {
            tracing::debug!("no model directive: {}", path.display());
            continue;
        };
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        mapping.insert(AgentName::from(stem), ModelName::from(model));
    }
    Ok(mapping)
}

/// Value of the first `model:` line in `contents`, trimmed.
fn first_directive_value(contents: &str) -> Option<&str> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix(MODEL_DIRECTIVE))
        .map(str::trim)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
