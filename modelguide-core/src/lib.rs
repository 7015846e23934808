//! Preference-driven recommendation engine for an AI-model catalog.
//!
//! A user answers four questions — use case, priority, hardware, required
//! language — and the engine ranks catalog descriptors against those
//! answers with a fixed 40/30/20/10 weighted score, returning a truncated
//! percentage-scored shortlist.
//!
//! The engine deals in option ids, scores and raw descriptors only; any
//! user-facing text is the caller's job.

pub mod catalog;
pub mod preset;
pub mod rank;
pub mod score;
pub mod taxonomy;
pub mod wizard;

pub use catalog::{CatalogSource, ModelCatalog, ModelDescriptor};
pub use rank::{rank, ScoredCandidate, Shortlist};
pub use score::score;
pub use taxonomy::{Dimension, PreferenceSelection};
pub use wizard::{WizardState, WizardStep};
