use crate::decision::domain::{DemandLevel, ListingSnapshot, ViewerContext};
use crate::decision::DecisionEngine;

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new()
}

/// Listing with every optional attribute populated at neutral values.
pub(super) fn listing(id: &str, price: f64) -> ListingSnapshot {
    ListingSnapshot {
        title: Some(format!("Apartment {id}")),
        city: Some("Valencia".to_string()),
        rooms: Some(2),
        beds: Some(2),
        market_price: Some(price),
        demand_level: Some(DemandLevel::Medium),
        quality_score: Some(50.0),
        photo_count: Some(3),
        description_length: Some(120),
        ..ListingSnapshot::new(id, price)
    }
}

pub(super) fn bare_listing(id: &str, price: f64) -> ListingSnapshot {
    ListingSnapshot::new(id, price)
}

/// A listing and context that land well inside the `fits` band.
pub(super) fn strong_match() -> (ListingSnapshot, ViewerContext) {
    let listing = ListingSnapshot {
        market_price: Some(1500.0),
        demand_level: Some(DemandLevel::High),
        quality_score: Some(80.0),
        photo_count: Some(12),
        description_length: Some(640),
        ..listing("strong", 1200.0)
    };
    let context = ViewerContext {
        price_min: Some(1000.0),
        price_max: Some(1600.0),
        preferred_cities: vec!["Valencia".to_string()],
        guests: Some(2),
        searched_cities: vec!["Valencia".to_string()],
    };
    (listing, context)
}

pub(super) fn price_grid() -> Vec<f64> {
    (0..=40).map(|step| 500.0 + f64::from(step) * 250.0).collect()
}

pub(super) fn contexts() -> Vec<ViewerContext> {
    vec![
        ViewerContext::default(),
        ViewerContext {
            price_max: Some(3000.0),
            ..ViewerContext::default()
        },
        ViewerContext {
            price_min: Some(1000.0),
            price_max: Some(6000.0),
            preferred_cities: vec!["valencia".to_string()],
            guests: Some(3),
            searched_cities: vec!["Madrid".to_string()],
        },
    ]
}
