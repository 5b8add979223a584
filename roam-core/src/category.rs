//! Categories describing broad kinds of destination.
//!
//! The enum offers compile-time safety for preference lookups.
//!
//! # Examples
//! ```
//! use roam_core::Category;
//!
//! assert_eq!(Category::Food.as_str(), "food");
//! assert_eq!(Category::Nature.to_string(), "nature");
//! ```

/// Broad category tag attached to a catalog location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Natural landscapes and parks.
    Nature,
    /// Food and cuisine experiences.
    Food,
    /// Bars, clubs, and late-night venues.
    Nightlife,
    /// Museums, galleries, and cultural centres.
    Culture,
    /// Sports and outdoor activities.
    Recreational,
    /// Anything the catalog does not classify further.
    Other,
}

impl Category {
    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use roam_core::Category;
    ///
    /// assert_eq!(Category::Nightlife.as_str(), "nightlife");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Food => "food",
            Self::Nightlife => "nightlife",
            Self::Culture => "culture",
            Self::Recreational => "recreational",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nature" => Ok(Self::Nature),
            "food" => Ok(Self::Food),
            "nightlife" => Ok(Self::Nightlife),
            "culture" => Ok(Self::Culture),
            "recreational" => Ok(Self::Recreational),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}
