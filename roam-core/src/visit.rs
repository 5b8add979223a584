//! A user's record of having been to a location.
//!
//! Visits arrive from an external collaborator and may be incomplete: the
//! embedded location snapshot, the rating, or the timestamp can each be
//! missing. [`Visit::as_valid`] projects the complete records into
//! [`ValidVisit`] views and silently drops the rest, so a single malformed
//! entry never aborts a scoring pass.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::Location;

/// Errors returned by [`VisitRating::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VisitRatingError {
    /// The rating fell outside the supported `1..=5` range.
    #[error("visit rating {0} is outside the supported range 1..=5")]
    OutOfRange(u8),
}

/// User-supplied rating of a visit, constrained to `1..=5`.
///
/// # Examples
/// ```
/// use roam_core::VisitRating;
///
/// let rating = VisitRating::new(5)?;
/// assert_eq!(rating.get(), 5);
/// assert!(VisitRating::new(6).is_err());
/// # Ok::<(), roam_core::VisitRatingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitRating(u8);

impl VisitRating {
    /// Lowest expressible rating.
    pub const MIN: Self = Self(1);
    /// Highest expressible rating.
    pub const MAX: Self = Self(5);

    /// Validate and construct a rating.
    ///
    /// # Errors
    /// Returns [`VisitRatingError::OutOfRange`] when `stars` is not in
    /// `1..=5`.
    pub const fn new(stars: u8) -> Result<Self, VisitRatingError> {
        if stars >= Self::MIN.0 && stars <= Self::MAX.0 {
            Ok(Self(stars))
        } else {
            Err(VisitRatingError::OutOfRange(stars))
        }
    }

    /// Construct a rating, clamping out-of-range values into `1..=5`.
    #[must_use]
    pub const fn clamped(stars: u8) -> Self {
        if stars < Self::MIN.0 {
            Self::MIN
        } else if stars > Self::MAX.0 {
            Self::MAX
        } else {
            Self(stars)
        }
    }

    /// Return the rating as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A visit as recorded by the visits service.
///
/// All scoring-relevant fields are optional because the upstream record
/// can be partially populated; see [`Visit::as_valid`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    /// Unique identifier of the visit record itself.
    pub id: u64,
    /// Snapshot of the visited location as of visit time.
    pub location: Option<Location>,
    /// The user's rating of the visit.
    pub rating: Option<VisitRating>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// When the visit happened.
    pub visited_at: Option<DateTime<Utc>>,
}

impl Visit {
    /// Construct an empty visit record.
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            location: None,
            rating: None,
            notes: None,
            visited_at: None,
        }
    }

    /// Attach the location snapshot while consuming `self`.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach a rating while consuming `self`.
    #[must_use]
    pub const fn with_rating(mut self, rating: VisitRating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach notes while consuming `self`.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach the visit timestamp while consuming `self`.
    #[must_use]
    pub const fn with_visited_at(mut self, visited_at: DateTime<Utc>) -> Self {
        self.visited_at = Some(visited_at);
        self
    }

    /// Project the visit into a [`ValidVisit`] when the location snapshot,
    /// rating, and timestamp are all present.
    ///
    /// Incomplete records yield `None` and are excluded from scoring
    /// without surfacing an error.
    ///
    /// # Examples
    /// ```
    /// use roam_core::Visit;
    ///
    /// let incomplete = Visit::new(4);
    /// assert!(incomplete.as_valid().is_none());
    /// ```
    #[must_use]
    pub fn as_valid(&self) -> Option<ValidVisit<'_>> {
        match (&self.location, self.rating, self.visited_at) {
            (Some(location), Some(rating), Some(visited_at)) => Some(ValidVisit {
                location,
                rating,
                visited_at,
            }),
            _ => None,
        }
    }
}

/// Borrowed view of a visit with every scoring-relevant field present.
#[derive(Debug, Clone, Copy)]
pub struct ValidVisit<'a> {
    /// The visited location snapshot.
    pub location: &'a Location,
    /// The user's rating.
    pub rating: VisitRating,
    /// When the visit happened.
    pub visited_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::location;
    use crate::Category;
    use chrono::TimeZone;
    use rstest::rstest;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single().unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn rating_rejects_out_of_range(#[case] stars: u8) {
        assert_eq!(
            VisitRating::new(stars),
            Err(VisitRatingError::OutOfRange(stars))
        );
    }

    #[rstest]
    fn rating_clamps_into_range() {
        assert_eq!(VisitRating::clamped(0), VisitRating::MIN);
        assert_eq!(VisitRating::clamped(9), VisitRating::MAX);
        assert_eq!(VisitRating::clamped(3).get(), 3);
    }

    #[rstest]
    fn complete_visit_is_valid() {
        let visit = Visit::new(1)
            .with_location(location(10, "FR", Category::Food))
            .with_rating(VisitRating::MAX)
            .with_visited_at(timestamp());

        let valid = visit.as_valid().expect("complete visit should be valid");
        assert_eq!(valid.location.id, 10);
        assert_eq!(valid.rating, VisitRating::MAX);
    }

    #[rstest]
    fn missing_location_invalidates() {
        let visit = Visit::new(2)
            .with_rating(VisitRating::MIN)
            .with_visited_at(timestamp());
        assert!(visit.as_valid().is_none());
    }

    #[rstest]
    fn missing_rating_invalidates() {
        let visit = Visit::new(3)
            .with_location(location(11, "JP", Category::Nature))
            .with_visited_at(timestamp());
        assert!(visit.as_valid().is_none());
    }

    #[rstest]
    fn missing_timestamp_invalidates() {
        let visit = Visit::new(4)
            .with_location(location(12, "JP", Category::Nature))
            .with_rating(VisitRating::MAX);
        assert!(visit.as_valid().is_none());
    }

    #[rstest]
    fn notes_do_not_affect_validity() {
        let visit = Visit::new(5)
            .with_location(location(13, "NL", Category::Culture))
            .with_rating(VisitRating::clamped(4))
            .with_visited_at(timestamp())
            .with_notes("rainy but worth it");
        assert!(visit.as_valid().is_some());
    }
}
