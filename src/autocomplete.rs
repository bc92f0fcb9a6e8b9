//! School-name autocomplete over the currently loaded candidate set.
//!
//! Matching is a substring test, case-insensitive and tolerant of Slovak
//! diacritics on either side: both the term and the candidate label are
//! compared raw and diacritic-folded. An empty term matches every
//! candidate. Rendering of suggestion rows is the embedder's concern; only
//! the matching predicate and the selection side effect live here.

use crate::normalize::fold_diacritics;
use crate::types::LocationOption;

/// A borrowed view over the candidate schools of the selected district.
///
/// Obtained from [`crate::state::CascadeState::autocomplete`]; valid only
/// as long as the candidate set it was created from.
#[derive(Debug, Clone, Copy)]
pub struct SchoolAutocomplete<'a> {
    candidates: &'a [LocationOption],
}

impl<'a> SchoolAutocomplete<'a> {
    pub fn new(candidates: &'a [LocationOption]) -> Self {
        SchoolAutocomplete { candidates }
    }

    /// Candidates whose label matches `term`.
    ///
    /// Order of the underlying list is preserved.
    pub fn suggestions(&self, term: &str) -> Vec<&'a LocationOption> {
        let raw = term.to_lowercase();
        let folded = fold_diacritics(&raw);

        self.candidates
            .iter()
            .filter(|candidate| {
                let label = candidate.name.to_lowercase();
                label.contains(&raw) || fold_diacritics(&label).contains(&folded)
            })
            .collect()
    }

    /// The candidate whose label equals `label` exactly.
    ///
    /// Committing free text goes through this: only an exact label match
    /// yields an identifier, since free text alone is not a valid
    /// submission.
    pub fn exact(&self, label: &str) -> Option<&'a LocationOption> {
        self.candidates.iter().find(|c| c.name == label)
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
