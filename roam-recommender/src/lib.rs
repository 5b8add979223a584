//! Heuristic destination ranking for the Roam engine.
//!
//! The crate implements the [`Recommender`](roam_core::Recommender)
//! boundary with a content-based heuristic: a user's valid visits are
//! aggregated into recency-weighted preference maps (country, category,
//! price tier), and each unvisited candidate is scored as its base catalog
//! rating plus affinity bonuses plus a small exploration noise term.
//! Users without usable history receive a uniform random sample instead,
//! and any anomaly in the personalised pass degrades to the same sample
//! rather than failing the caller.
//!
//! All randomness is drawn from a [`rand_chacha::ChaCha8Rng`] seeded from
//! the request, so identical inputs and an identical seed reproduce the
//! output exactly.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use roam_core::{Category, Location, RecommendRequest, Recommender, VisitHistory};
//! use roam_recommender::HeuristicRecommender;
//!
//! let catalog = vec![
//!     Location::new(1, "Louvre", "Paris", "FR", Category::Culture, Coord { x: 2.34, y: 48.86 })
//!         .with_rating(4.7),
//!     Location::new(2, "Ueno Park", "Tokyo", "JP", Category::Nature, Coord { x: 139.77, y: 35.71 })
//!         .with_rating(4.2),
//! ];
//!
//! let recommender = HeuristicRecommender::new();
//! let picks = recommender.recommend(&catalog, &VisitHistory::default(), &RecommendRequest::new(7));
//! assert_eq!(picks.len(), 2);
//! ```

#![forbid(unsafe_code)]

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roam_core::{Location, RecommendRequest, Recommender, ValidVisit, VisitHistory};

mod error;
mod preferences;
mod weights;

pub use error::{RecommendAnomaly, WeightsError};
pub use preferences::PreferenceProfile;
pub use weights::{DEFAULT_BASE_RATING, RECENCY_DECAY, ScoreWeights};

/// Recommender blending per-user preference affinity with catalog ratings.
///
/// Construct with [`HeuristicRecommender::new`] for the default weights or
/// [`HeuristicRecommender::with_weights`] for validated overrides.
#[derive(Debug, Clone, Default)]
pub struct HeuristicRecommender {
    weights: ScoreWeights,
}

impl HeuristicRecommender {
    /// Construct a recommender with the default score weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a recommender with explicit score weights.
    ///
    /// # Errors
    /// Returns [`WeightsError::Invalid`] when the weights are not finite,
    /// negative, or sum to zero.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, WeightsError> {
        let validated = weights.validate()?;
        Ok(Self { weights: validated })
    }

    /// Score and rank the unvisited candidates against the user's
    /// preference profile.
    fn personalised<R: Rng>(
        &self,
        unvisited: &[&Location],
        visits: &[ValidVisit<'_>],
        limit: usize,
        rng: &mut R,
    ) -> Result<Vec<Location>, RecommendAnomaly> {
        let prefs = PreferenceProfile::from_visits(visits);
        let mut scored: Vec<(f32, &Location)> = Vec::with_capacity(unvisited.len());
        for candidate in unvisited.iter().copied() {
            let noise = rng.gen_range(0.0_f32..1.0_f32);
            let score = composite_score(self.weights, &prefs, candidate, noise);
            if !score.is_finite() {
                return Err(RecommendAnomaly::NonFiniteScore {
                    location_id: candidate.id,
                });
            }
            scored.push((score, candidate));
        }
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect())
    }
}

impl Recommender for HeuristicRecommender {
    fn recommend(
        &self,
        catalog: &[Location],
        history: &VisitHistory,
        request: &RecommendRequest,
    ) -> Vec<Location> {
        let visited = history.visited_ids();
        let unvisited: Vec<&Location> = catalog
            .iter()
            .filter(|candidate| !visited.contains(&candidate.id))
            .collect();
        if unvisited.is_empty() || request.limit == 0 {
            return Vec::new();
        }

        let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
        let valid = history.valid_visits();
        if visited.is_empty() || valid.is_empty() {
            return sample_uniform(&unvisited, request.limit, &mut rng);
        }

        match self.personalised(&unvisited, &valid, request.limit, &mut rng) {
            Ok(ranked) => ranked,
            Err(anomaly) => {
                log::warn!("personalised scoring degraded to uniform sampling: {anomaly}");
                sample_uniform(&unvisited, request.limit, &mut rng)
            }
        }
    }
}

/// Blend a candidate's base rating with its affinity bonuses and noise.
#[expect(
    clippy::float_arithmetic,
    reason = "composite scoring sums the rating, affinity bonuses, and noise"
)]
fn composite_score(
    weights: ScoreWeights,
    prefs: &PreferenceProfile,
    candidate: &Location,
    noise: f32,
) -> f32 {
    let base = candidate.rating.unwrap_or(DEFAULT_BASE_RATING);
    let country_bonus = weights.country * prefs.country_share(&candidate.country);
    let category_bonus = weights.category * prefs.category_share(candidate.category);
    let price_bonus = candidate
        .price_level
        .map_or(0.0_f32, |tier| weights.price * prefs.price_share(tier));
    base + country_bonus + category_bonus + price_bonus + noise
}

/// Uniformly sample up to `limit` candidates, shuffle-then-truncate.
fn sample_uniform<R: Rng>(candidates: &[&Location], limit: usize, rng: &mut R) -> Vec<Location> {
    let mut pool: Vec<&Location> = candidates.to_vec();
    pool.shuffle(rng);
    pool.into_iter().take(limit).cloned().collect()
}
