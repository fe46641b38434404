//! # roster-recon
//!
//! README agent-table reconciliation: the fixed row grammar, the per-line
//! rewrite pass, the atomic README writer, unified diffs, and per-agent
//! status signals.
//!
//! [`reconcile`] is a pure transform — callers persist its result with
//! [`atomic_write`] only when something changed.

pub mod diff;
pub mod error;
pub mod reconcile;
pub mod row;
pub mod status;
pub mod writer;

pub use error::ReconError;
pub use reconcile::{reconcile, scan_models, Reconciliation, SKIP_MISSING_AGENT};
pub use row::{AgentRef, LineEnding, TableRow};
pub use status::{check, AgentStatus, RosterSignal};
pub use writer::{atomic_write, WriteResult};
