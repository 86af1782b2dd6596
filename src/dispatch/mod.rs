//! Notification dispatch pipeline.
//!
//! A dispatch runs one recipe: validate the submission, render the message
//! bodies, acquire a verified transport, send the primary notice, then
//! optionally send a confirmation back to the submitter. Stages are strictly
//! sequential within a dispatch; concurrent dispatches share only the
//! immutable template registry, read-only settings, and atomic counters.

mod context;
mod dispatcher;
mod recipe;
mod stats;

pub use context::SubmissionContext;
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use recipe::{difficulty_label, Recipe, UNSET_FIELD_PLACEHOLDER};
pub use stats::{DispatchStats, DispatchStatsSnapshot};
