use super::domain::{DemandLevel, ListingSnapshot, SubscoreBreakdown, ViewerContext};

const BASELINE: f64 = 50.0;
const OVER_BUDGET_PENALTY: f64 = 30.0;
const COMFORTABLE_RANGE_BONUS: f64 = 15.0;
const PREFERRED_CITY_BONUS: f64 = 40.0;
const SEARCHED_CITY_BONUS: f64 = 20.0;
pub(crate) const GOOD_PHOTO_COUNT: u16 = 5;
pub(crate) const MIN_PHOTO_COUNT: u16 = 3;
const LONG_DESCRIPTION: u32 = 200;

/// Weights expressed in tenths so the composite is computed without binary drift.
const PRICE_WEIGHT: u32 = 4;
const LOCATION_WEIGHT: u32 = 3;
const DEMAND_WEIGHT: u32 = 2;
const QUALITY_WEIGHT: u32 = 1;
const WEIGHT_SCALE: u32 = 10;

const _: () = assert!(
    PRICE_WEIGHT + LOCATION_WEIGHT + DEMAND_WEIGHT + QUALITY_WEIGHT == WEIGHT_SCALE,
    "subscore weights must sum to 1.0"
);

pub(crate) fn subscores(listing: &ListingSnapshot, context: &ViewerContext) -> SubscoreBreakdown {
    SubscoreBreakdown {
        price: price_score(listing, context),
        location: location_score(listing, context),
        demand: demand_score(listing.demand_level),
        quality: quality_score(listing),
    }
}

/// Percentage by which the listing undercuts the market; negative when it is pricier.
/// Zero when no usable market reference exists.
pub(crate) fn market_diff_pct(listing: &ListingSnapshot) -> f64 {
    match listing.known_market_price() {
        Some(market) => (market - listing.price) * 100.0 / market,
        None => 0.0,
    }
}

pub(crate) fn price_score(listing: &ListingSnapshot, context: &ViewerContext) -> f64 {
    let mut score = BASELINE + market_diff_pct(listing);
    let price = listing.price;

    if context.price_max.is_some_and(|max| price > max) {
        score -= OVER_BUDGET_PENALTY;
    } else if let (Some(min), Some(max)) = (context.price_min, context.price_max) {
        let midpoint = (min + max) / 2.0;
        if price <= midpoint {
            score += COMFORTABLE_RANGE_BONUS;
        }
    }

    clamp_score(score)
}

pub(crate) fn location_score(listing: &ListingSnapshot, context: &ViewerContext) -> f64 {
    let city = listing.city.as_deref();
    let mut score = BASELINE;
    if context.prefers_city(city) {
        score += PREFERRED_CITY_BONUS;
    }
    if context.searched_city(city) {
        score += SEARCHED_CITY_BONUS;
    }
    clamp_score(score)
}

pub(crate) fn demand_score(level: Option<DemandLevel>) -> f64 {
    match level.unwrap_or(DemandLevel::Medium) {
        DemandLevel::High => 85.0,
        DemandLevel::Medium => 60.0,
        DemandLevel::Low => 35.0,
    }
}

pub(crate) fn quality_score(listing: &ListingSnapshot) -> f64 {
    let mut score = listing.quality_score.unwrap_or(BASELINE);

    match listing.photo_count {
        Some(count) if count >= GOOD_PHOTO_COUNT => score += 10.0,
        Some(count) if count >= MIN_PHOTO_COUNT => {}
        _ => score -= 15.0,
    }

    if listing
        .description_length
        .is_some_and(|length| length >= LONG_DESCRIPTION)
    {
        score += 5.0;
    }

    clamp_score(score)
}

/// Weighted composite rounded half-up. Subscores are clamped, so the sum is never negative.
pub(crate) fn composite_score(subscores: &SubscoreBreakdown) -> u8 {
    let weighted = f64::from(PRICE_WEIGHT) * subscores.price
        + f64::from(LOCATION_WEIGHT) * subscores.location
        + f64::from(DEMAND_WEIGHT) * subscores.demand
        + f64::from(QUALITY_WEIGHT) * subscores.quality;
    let score = (weighted / f64::from(WEIGHT_SCALE) + 0.5).floor();
    score.clamp(0.0, 100.0) as u8
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
