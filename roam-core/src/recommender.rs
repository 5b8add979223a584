//! Rank unvisited destinations for a user.
//!
//! The `Recommender` trait is the seam between the presentation layer and
//! ranking implementations. Calls are pure: each receives a fresh snapshot
//! of the catalog and history and returns a fresh list. Implementations
//! must never fail the caller's flow: anomalies degrade to a weaker
//! ranking policy internally rather than surfacing.

use crate::{Location, VisitHistory};

/// Default maximum number of recommendations per request.
pub const DEFAULT_LIMIT: usize = 10;

/// Parameters for a recommendation request.
///
/// The request captures the result cap and a random seed so stochastic
/// components (exploration noise, fallback sampling) are reproducible.
///
/// # Examples
/// ```
/// use roam_core::RecommendRequest;
///
/// let request = RecommendRequest::new(42).with_limit(5);
/// assert_eq!(request.limit, 5);
/// assert_eq!(request.seed, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendRequest {
    /// Upper bound on the number of returned locations.
    pub limit: usize,
    /// Seed for reproducible stochastic components.
    pub seed: u64,
}

impl RecommendRequest {
    /// Construct a request with the default limit.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            seed,
        }
    }

    /// Override the result cap while consuming `self`.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Produce a ranked list of unvisited destinations.
///
/// Implementations must be thread-safe (`Send + Sync`) so recommenders
/// can serve callers across threads. The method is infallible: when
/// personalisation is impossible or the data is malformed, implementers
/// must degrade to a weaker policy (or an empty list) rather than error.
///
/// The returned list never contains a location whose id is in the
/// history's visited set, never contains duplicates, and is at most
/// `request.limit` long.
///
/// # Examples
///
/// ```rust
/// use roam_core::{Location, RecommendRequest, Recommender, VisitHistory};
///
/// struct FirstComeRecommender;
///
/// impl Recommender for FirstComeRecommender {
///     fn recommend(
///         &self,
///         catalog: &[Location],
///         history: &VisitHistory,
///         request: &RecommendRequest,
///     ) -> Vec<Location> {
///         let visited = history.visited_ids();
///         catalog
///             .iter()
///             .filter(|location| !visited.contains(&location.id))
///             .take(request.limit)
///             .cloned()
///             .collect()
///     }
/// }
///
/// let recommender = FirstComeRecommender;
/// let history = VisitHistory::default();
/// let picks = recommender.recommend(&[], &history, &RecommendRequest::new(7));
/// assert!(picks.is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Rank `catalog` for the user described by `history`.
    fn recommend(
        &self,
        catalog: &[Location],
        history: &VisitHistory,
        request: &RecommendRequest,
    ) -> Vec<Location>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{location, rated_visit};
    use crate::Category;
    use rstest::rstest;

    struct EchoRecommender;

    impl Recommender for EchoRecommender {
        fn recommend(
            &self,
            catalog: &[Location],
            history: &VisitHistory,
            request: &RecommendRequest,
        ) -> Vec<Location> {
            let visited = history.visited_ids();
            catalog
                .iter()
                .filter(|candidate| !visited.contains(&candidate.id))
                .take(request.limit)
                .cloned()
                .collect()
        }
    }

    #[rstest]
    fn default_request_caps_at_ten() {
        assert_eq!(RecommendRequest::default().limit, DEFAULT_LIMIT);
    }

    #[rstest]
    fn trait_objects_are_usable() {
        let recommender: Box<dyn Recommender> = Box::new(EchoRecommender);
        let catalog = vec![
            location(1, "FR", Category::Food),
            location(2, "JP", Category::Nature),
        ];
        let history =
            VisitHistory::new(vec![rated_visit(1, location(1, "FR", Category::Food), 5, 1)]);

        let picks = recommender.recommend(&catalog, &history, &RecommendRequest::new(0));
        assert_eq!(picks.len(), 1);
        assert!(picks.iter().all(|pick| pick.id != 1));
    }
}
