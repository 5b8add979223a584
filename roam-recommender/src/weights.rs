//! Tunable multipliers applied to the preference signals.

use crate::error::WeightsError;

/// Exponential decay applied per step down the recency-sorted visit list.
pub const RECENCY_DECAY: f32 = 0.85;

/// Base score substituted for candidates without a catalog rating.
pub const DEFAULT_BASE_RATING: f32 = 3.0;

/// Relative weighting of the three preference signals.
///
/// Each multiplier scales the candidate's normalised share of the
/// corresponding preference map. The defaults favour category affinity
/// over country affinity, with price affinity as a weak signal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the country affinity share.
    pub country: f32,
    /// Multiplier applied to the category affinity share.
    pub category: f32,
    /// Multiplier applied to the price-tier affinity share.
    pub price: f32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::Invalid`] when any value is not finite, any
    /// value is negative, or the total weight is zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightsError::Invalid)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.country.is_finite() && self.category.is_finite() && self.price.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.country >= 0.0_f32 && self.category >= 0.0_f32 && self.price >= 0.0_f32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.country + self.category + self.price) != 0.0_f32
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            country: 50.0_f32,
            category: 75.0_f32,
            price: 20.0_f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert!(ScoreWeights::default().validate().is_ok());
    }

    #[rstest]
    fn zero_total_is_rejected() {
        let weights = ScoreWeights {
            country: 0.0,
            category: 0.0,
            price: 0.0,
        };
        assert_eq!(weights.validate(), Err(WeightsError::Invalid));
    }

    #[rstest]
    fn negative_weight_is_rejected() {
        let weights = ScoreWeights {
            country: -1.0,
            ..ScoreWeights::default()
        };
        assert_eq!(weights.validate(), Err(WeightsError::Invalid));
    }

    #[rstest]
    fn non_finite_weight_is_rejected() {
        let weights = ScoreWeights {
            category: f32::NAN,
            ..ScoreWeights::default()
        };
        assert_eq!(weights.validate(), Err(WeightsError::Invalid));
    }
}
