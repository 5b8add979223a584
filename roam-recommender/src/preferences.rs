//! Preference aggregation over a user's visit history.
//!
//! Visits are sorted most-recent-first and assigned exponentially
//! decaying weights; each visit's rating, scaled by its location's
//! recency weight, then accumulates into per-country, per-category, and
//! per-price-tier sums. Candidates are scored against the normalised
//! share each of their attributes holds in those sums.

use std::collections::HashMap;

use roam_core::{Category, PriceLevel, ValidVisit};

use crate::weights::RECENCY_DECAY;

/// Accumulated preference signals keyed by location attribute.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use geo::Coord;
/// use roam_core::{Category, Location, Visit, VisitHistory, VisitRating};
/// use roam_recommender::PreferenceProfile;
///
/// let bistro = Location::new(10, "Bistro", "Lyon", "FR", Category::Food, Coord { x: 4.83, y: 45.76 });
/// let visit = Visit::new(1)
///     .with_location(bistro)
///     .with_rating(VisitRating::MAX)
///     .with_visited_at(Utc::now());
///
/// let history = VisitHistory::new(vec![visit]);
/// let profile = PreferenceProfile::from_visits(&history.valid_visits());
///
/// assert_eq!(profile.country_share("FR"), 1.0);
/// assert_eq!(profile.country_share("JP"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceProfile {
    country: HashMap<String, f32>,
    category: HashMap<Category, f32>,
    price: HashMap<PriceLevel, f32>,
    country_total: f32,
    category_total: f32,
    price_total: f32,
}

impl PreferenceProfile {
    /// Aggregate preference signals from the given valid visits.
    ///
    /// The per-location recency weight map is written while walking the
    /// recency-sorted list, so when a location was visited more than once
    /// the weight retained for it belongs to the visit processed last
    /// (the oldest in the sorted order). Visits whose snapshot lacks a
    /// price tier contribute to no price bucket.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "preference aggregation multiplies ratings by decay weights"
    )]
    pub fn from_visits(visits: &[ValidVisit<'_>]) -> Self {
        let mut ordered: Vec<ValidVisit<'_>> = visits.to_vec();
        ordered.sort_by(|a, b| b.visited_at.cmp(&a.visited_at));

        let mut recency: HashMap<u64, f32> = HashMap::new();
        let mut decayed = 1.0_f32;
        for visit in &ordered {
            recency.insert(visit.location.id, decayed);
            decayed *= RECENCY_DECAY;
        }

        let mut country: HashMap<String, f32> = HashMap::new();
        let mut category: HashMap<Category, f32> = HashMap::new();
        let mut price: HashMap<PriceLevel, f32> = HashMap::new();
        for visit in &ordered {
            let weight = recency
                .get(&visit.location.id)
                .copied()
                .unwrap_or_default();
            let weighted = f32::from(visit.rating.get()) * weight;
            *country
                .entry(visit.location.country.clone())
                .or_insert(0.0_f32) += weighted;
            *category.entry(visit.location.category).or_insert(0.0_f32) += weighted;
            if let Some(tier) = visit.location.price_level {
                *price.entry(tier).or_insert(0.0_f32) += weighted;
            }
        }

        let country_total = total(&country);
        let category_total = total(&category);
        let price_total = total(&price);
        Self {
            country,
            category,
            price,
            country_total,
            category_total,
            price_total,
        }
    }

    /// Normalised share of the preference mass held by `country`.
    ///
    /// Returns `0.0` when the country never appears in the history.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "shares divide accumulated mass by the map total"
    )]
    pub fn country_share(&self, country: &str) -> f32 {
        self.country
            .get(country)
            .map_or(0.0_f32, |mass| mass / self.country_total)
    }

    /// Normalised share of the preference mass held by `category`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "shares divide accumulated mass by the map total"
    )]
    pub fn category_share(&self, category: Category) -> f32 {
        self.category
            .get(&category)
            .map_or(0.0_f32, |mass| mass / self.category_total)
    }

    /// Normalised share of the preference mass held by `tier`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "shares divide accumulated mass by the map total"
    )]
    pub fn price_share(&self, tier: PriceLevel) -> f32 {
        self.price
            .get(&tier)
            .map_or(0.0_f32, |mass| mass / self.price_total)
    }
}

/// Sum a preference map, defaulting to 1 for empty maps so later
/// divisions stay defined.
#[expect(
    clippy::float_arithmetic,
    reason = "totals sum the accumulated preference mass"
)]
fn total<K>(map: &HashMap<K, f32>) -> f32 {
    if map.is_empty() {
        1.0_f32
    } else {
        map.values().sum()
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::float_arithmetic,
        reason = "tests reproduce the decay arithmetic to pin expected values"
    )]

    use super::*;
    use roam_core::test_support::{location, rated_visit, unrated_visit};
    use roam_core::{Location, Visit, VisitHistory};
    use rstest::rstest;

    fn profile_of(visits: Vec<Visit>) -> PreferenceProfile {
        let history = VisitHistory::new(visits);
        let valid = history.valid_visits();
        PreferenceProfile::from_visits(&valid)
    }

    #[rstest]
    fn recent_visits_outweigh_older_ones() {
        let profile = profile_of(vec![
            rated_visit(1, location(10, "FR", Category::Food), 5, 1),
            rated_visit(2, location(20, "JP", Category::Food), 5, 30),
        ]);

        assert!(profile.country_share("FR") > profile.country_share("JP"));
    }

    #[rstest]
    fn repeat_visit_weight_is_overwritten_by_the_oldest_occurrence() {
        // Recency order: loc 10 (w=1.0), loc 20 (w=0.85), loc 10 again
        // (w=0.7225). The second write wins, so both visits to loc 10
        // accumulate with weight 0.7225.
        let profile = profile_of(vec![
            rated_visit(1, location(10, "FR", Category::Food), 5, 1),
            rated_visit(2, location(20, "JP", Category::Nature), 5, 2),
            rated_visit(3, location(10, "FR", Category::Food), 4, 3),
        ]);

        let w_old = RECENCY_DECAY * RECENCY_DECAY;
        let fr_mass = 5.0 * w_old + 4.0 * w_old;
        let jp_mass = 5.0 * RECENCY_DECAY;
        let expected = fr_mass / (fr_mass + jp_mass);
        assert!((profile.country_share("FR") - expected).abs() < 0.000_1);
    }

    #[rstest]
    fn shares_of_present_keys_sum_to_one() {
        let profile = profile_of(vec![
            rated_visit(1, location(10, "FR", Category::Food), 5, 1),
            rated_visit(2, location(20, "JP", Category::Nature), 3, 2),
            rated_visit(3, location(30, "NL", Category::Culture), 4, 3),
        ]);

        let sum = profile.country_share("FR")
            + profile.country_share("JP")
            + profile.country_share("NL");
        assert!((sum - 1.0).abs() < 0.000_1);
    }

    #[rstest]
    fn absent_attributes_have_zero_share() {
        let profile = profile_of(vec![rated_visit(
            1,
            location(10, "FR", Category::Food),
            5,
            1,
        )]);

        assert_eq!(profile.country_share("BR"), 0.0);
        assert_eq!(profile.category_share(Category::Nightlife), 0.0);
        assert_eq!(profile.price_share(PriceLevel::MAX), 0.0);
    }

    #[rstest]
    fn visits_without_price_tier_skip_the_price_map() {
        let bare = Location::new(
            40,
            "Night Market",
            "Taipei",
            "TW",
            Category::Food,
            geo::Coord { x: 121.5, y: 25.0 },
        );
        let profile = profile_of(vec![rated_visit(1, bare, 5, 1)]);

        // The price map stayed empty; its total defaults to 1 and every
        // tier reads as zero share.
        assert_eq!(profile.price_share(PriceLevel::MIN), 0.0);
        assert_eq!(profile.country_share("TW"), 1.0);
    }

    #[rstest]
    fn invalid_visits_are_not_aggregated() {
        let profile = profile_of(vec![
            rated_visit(1, location(10, "FR", Category::Food), 5, 1),
            unrated_visit(2, location(20, "JP", Category::Nature)),
        ]);

        assert_eq!(profile.country_share("JP"), 0.0);
        assert_eq!(profile.country_share("FR"), 1.0);
    }
}
