//! Core domain types for the Roam engine.
//!
//! The crate models the two inputs of the recommendation boundary, a
//! catalog of [`Location`]s and a user's [`VisitHistory`], together with
//! the [`Recommender`] trait that ranking implementations plug into.
//! Types validate at the edges so downstream components stay honest:
//! constrained values such as [`PriceLevel`] and [`VisitRating`] cannot be
//! constructed out of range, and incomplete visit records are projected
//! away through [`Visit::as_valid`] instead of failing whole computations.

#![forbid(unsafe_code)]

mod category;
mod history;
mod location;
mod recommender;
mod visit;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::Category;
pub use history::VisitHistory;
pub use location::{Location, PriceLevel, PriceLevelError};
pub use recommender::{DEFAULT_LIMIT, RecommendRequest, Recommender};
pub use visit::{ValidVisit, Visit, VisitRating, VisitRatingError};
