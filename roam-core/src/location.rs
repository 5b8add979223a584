//! Catalog locations and their constrained attributes.

use geo::Coord;
use thiserror::Error;

use crate::Category;

/// Errors returned when constructing constrained location attributes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceLevelError {
    /// The tier fell outside the supported `1..=5` range.
    #[error("price level {0} is outside the supported range 1..=5")]
    OutOfRange(u8),
}

/// Price tier of a location, constrained to `1..=5`.
///
/// # Examples
/// ```
/// use roam_core::PriceLevel;
///
/// let tier = PriceLevel::new(3)?;
/// assert_eq!(tier.get(), 3);
/// assert!(PriceLevel::new(0).is_err());
/// # Ok::<(), roam_core::PriceLevelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceLevel(u8);

impl PriceLevel {
    /// Lowest supported tier.
    pub const MIN: Self = Self(1);
    /// Highest supported tier.
    pub const MAX: Self = Self(5);

    /// Validate and construct a price tier.
    ///
    /// # Errors
    /// Returns [`PriceLevelError::OutOfRange`] when `tier` is not in
    /// `1..=5`.
    pub const fn new(tier: u8) -> Result<Self, PriceLevelError> {
        if tier >= Self::MIN.0 && tier <= Self::MAX.0 {
            Ok(Self(tier))
        } else {
            Err(PriceLevelError::OutOfRange(tier))
        }
    }

    /// Construct a tier, clamping out-of-range values into `1..=5`.
    ///
    /// # Examples
    /// ```
    /// use roam_core::PriceLevel;
    ///
    /// assert_eq!(PriceLevel::clamped(0), PriceLevel::MIN);
    /// assert_eq!(PriceLevel::clamped(9), PriceLevel::MAX);
    /// ```
    #[must_use]
    pub const fn clamped(tier: u8) -> Self {
        if tier < Self::MIN.0 {
            Self::MIN
        } else if tier > Self::MAX.0 {
            Self::MAX
        } else {
            Self(tier)
        }
    }

    /// Return the tier as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A destination in the catalog.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// catalog owns these records; recommenders treat them as immutable
/// snapshots.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roam_core::{Category, Location};
///
/// let location = Location::new(
///     1,
///     "Jardin des Tuileries",
///     "Paris",
///     "FR",
///     Category::Nature,
///     Coord { x: 2.3275, y: 48.8634 },
/// )
/// .with_rating(4.4);
///
/// assert_eq!(location.id, 1);
/// assert_eq!(location.rating, Some(4.4));
/// assert!(location.price_level.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique, stable identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// City the location belongs to.
    pub city: String,
    /// Country code or name as the catalog records it.
    pub country: String,
    /// Broad category tag.
    pub category: Category,
    /// Catalog-wide average rating in `0.0..=5.0`, when known.
    pub rating: Option<f32>,
    /// Price tier, when known.
    pub price_level: Option<PriceLevel>,
    /// Geospatial position.
    pub position: Coord<f64>,
    /// Free-text description.
    pub description: Option<String>,
}

impl Location {
    /// Construct a location with the required attributes only.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        category: Category,
        position: Coord<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city: city.into(),
            country: country.into(),
            category,
            rating: None,
            price_level: None,
            position,
            description: None,
        }
    }

    /// Attach a catalog rating while consuming `self`, enabling chaining.
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach a price tier while consuming `self`, enabling chaining.
    #[must_use]
    pub const fn with_price_level(mut self, tier: PriceLevel) -> Self {
        self.price_level = Some(tier);
        self
    }

    /// Attach a description while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
