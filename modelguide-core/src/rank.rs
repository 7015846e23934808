//! Ranking: score the whole catalog, keep the matches, order them.

use crate::catalog::ModelDescriptor;
use crate::score;
use crate::taxonomy::PreferenceSelection;
use serde::Serialize;

/// How many candidates survive truncation.
pub const SHORTLIST_LIMIT: usize = 12;
/// Size of the presentation podium at the head of the shortlist.
pub const PODIUM_SIZE: usize = 3;

/// One ranked catalog entry. Ephemeral — recomputed on every ranking call.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub model: ModelDescriptor,
    /// Match percentage in [1, 100]; zero-scored candidates never appear.
    pub score: u8,
}

/// The ranked, truncated result set, partitioned for presentation tiering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Shortlist {
    entries: Vec<ScoredCandidate>,
}

impl Shortlist {
    pub fn entries(&self) -> &[ScoredCandidate] {
        &self.entries
    }

    /// Up to the first three candidates.
    pub fn top3(&self) -> &[ScoredCandidate] {
        let end = self.entries.len().min(PODIUM_SIZE);
        &self.entries[..end]
    }

    /// Everything after the podium.
    pub fn more(&self) -> &[ScoredCandidate] {
        let start = self.entries.len().min(PODIUM_SIZE);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank a catalog against a selection.
///
/// Candidates scoring zero are dropped. The sort is descending by score and
/// stable, so equal scores keep their original catalog order. An empty
/// catalog, or one where nothing matches, yields an empty shortlist — a
/// valid "no recommendations" state, not an error.
pub fn rank(selection: &PreferenceSelection, catalog: &[ModelDescriptor]) -> Shortlist {
    let mut entries: Vec<ScoredCandidate> = catalog
        .iter()
        .map(|model| ScoredCandidate {
            model: model.clone(),
            score: score::score(selection, model),
        })
        .filter(|c| c.score > 0)
        .collect();

    // Vec::sort_by is stable: catalog order breaks ties
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(SHORTLIST_LIMIT);

    Shortlist { entries }
}
