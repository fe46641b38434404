//! Dry-run unified diff support for `roster diff`.

use similar::TextDiff;

use roster_core::types::ModelMapping;
use roster_core::RepoLayout;

use crate::error::{io_err, ReconError};
use crate::reconcile::reconcile;

/// Unified diff of what `sync` would write to the README.
///
/// No files are written. Returns `None` when the README already matches the
/// declared mapping.
pub fn diff_readme(
    layout: &RepoLayout,
    mapping: &ModelMapping,
) -> Result<Option<String>, ReconError> {
    let original =
        std::fs::read_to_string(&layout.readme).map_err(|e| io_err(&layout.readme, e))?;
    let outcome = reconcile(&original, mapping)?;
    if !outcome.changed() {
        return Ok(None);
    }

    let relative = layout
        .readme
        .strip_prefix(&layout.root)
        .unwrap_or(layout.readme.as_path());
    let old_header = format!("a/{}", relative.display());
    let new_header = format!("b/{}", relative.display());
    let unified = TextDiff::from_lines(&original, &outcome.content)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(unified))
}
