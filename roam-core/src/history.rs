//! The authoritative visits collection and its derived visited set.
//!
//! The visited-id set is recomputed from the visits collection on every
//! call rather than cached alongside it, so the two can never drift. A
//! caller that already holds a visited set may supply it explicitly; the
//! derivation is then skipped entirely.

use std::collections::HashSet;

use crate::{ValidVisit, Visit};

/// A user's visit history, owning the visit records.
///
/// # Examples
/// ```
/// use roam_core::{Visit, VisitHistory};
///
/// let history = VisitHistory::new(vec![Visit::new(1)]);
/// // An incomplete visit contributes nothing.
/// assert!(history.visited_ids().is_empty());
/// assert!(history.valid_visits().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct VisitHistory {
    visits: Vec<Visit>,
    visited_override: Option<HashSet<u64>>,
}

impl VisitHistory {
    /// Construct a history whose visited set is derived from the visits.
    #[must_use]
    pub const fn new(visits: Vec<Visit>) -> Self {
        Self {
            visits,
            visited_override: None,
        }
    }

    /// Construct a history with a caller-precomputed visited set.
    ///
    /// The supplied set replaces derivation; the visits collection is
    /// still used for preference signals.
    #[must_use]
    pub fn with_visited(visits: Vec<Visit>, visited: impl IntoIterator<Item = u64>) -> Self {
        Self {
            visits,
            visited_override: Some(visited.into_iter().collect()),
        }
    }

    /// Return the raw visit records.
    #[must_use]
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Return the visits that carry every scoring-relevant field.
    #[must_use]
    pub fn valid_visits(&self) -> Vec<ValidVisit<'_>> {
        self.visits.iter().filter_map(Visit::as_valid).collect()
    }

    /// Return the set of visited location ids.
    ///
    /// Recomputed from the valid visits on each call unless a precomputed
    /// set was supplied via [`VisitHistory::with_visited`].
    #[must_use]
    pub fn visited_ids(&self) -> HashSet<u64> {
        self.visited_override.as_ref().map_or_else(
            || {
                self.visits
                    .iter()
                    .filter_map(Visit::as_valid)
                    .map(|visit| visit.location.id)
                    .collect()
            },
            Clone::clone,
        )
    }
}
