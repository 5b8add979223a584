//! Facade crate for the Roam recommendation engine.
//!
//! This crate re-exports the core domain types and the heuristic
//! recommender so applications depend on a single entry point.

#![forbid(unsafe_code)]

pub use roam_core::{
    Category, DEFAULT_LIMIT, Location, PriceLevel, PriceLevelError, RecommendRequest, Recommender,
    ValidVisit, Visit, VisitHistory, VisitRating, VisitRatingError,
};

pub use roam_recommender::{
    DEFAULT_BASE_RATING, HeuristicRecommender, PreferenceProfile, RECENCY_DECAY, RecommendAnomaly,
    ScoreWeights, WeightsError,
};
