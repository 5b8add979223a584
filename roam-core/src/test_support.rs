//! Test-only builders for catalog locations and visit records, shared by
//! unit, property, and behavioural tests.

use chrono::{Duration, Utc};
use geo::Coord;

use crate::{Category, Location, PriceLevel, Visit, VisitRating};

/// Build a catalog location with a mid-range rating and price tier.
///
/// The fixed rating (4.0) and tier (2) keep candidates comparable so
/// tests can isolate the preference signals under scrutiny.
#[must_use]
pub fn location(id: u64, country: &str, category: Category) -> Location {
    Location::new(
        id,
        format!("location-{id}"),
        "test-city",
        country,
        category,
        Coord { x: 0.0, y: 0.0 },
    )
    .with_rating(4.0)
    .with_price_level(PriceLevel::clamped(2))
}

/// Build a complete, scoreable visit `days_ago` days in the past.
///
/// Ratings are clamped into `1..=5` so callers can pass plain integers.
#[must_use]
pub fn rated_visit(id: u64, visited: Location, stars: u8, days_ago: i64) -> Visit {
    Visit::new(id)
        .with_location(visited)
        .with_rating(VisitRating::clamped(stars))
        .with_visited_at(Utc::now() - Duration::days(days_ago))
}

/// Build a visit that is missing its location snapshot.
#[must_use]
pub fn visit_without_location(id: u64) -> Visit {
    Visit::new(id)
        .with_rating(VisitRating::clamped(3))
        .with_visited_at(Utc::now())
}

/// Build a visit that is missing its rating.
#[must_use]
pub fn unrated_visit(id: u64, visited: Location) -> Visit {
    Visit::new(id)
        .with_location(visited)
        .with_visited_at(Utc::now())
}
