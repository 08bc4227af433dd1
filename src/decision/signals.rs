use super::domain::{DemandLevel, ListingSnapshot, PriceSignal, Verdict};
use super::subscores::market_diff_pct;

const MARKET_BAND_PCT: f64 = 5.0;
const FITS_THRESHOLD: u8 = 75;
const NEUTRAL_THRESHOLD: u8 = 50;

/// Categorical price position. Computed from the raw price inputs, not from the price subscore,
/// so the two can disagree near the band edges.
pub(crate) fn price_signal(listing: &ListingSnapshot) -> PriceSignal {
    if listing.known_market_price().is_none() {
        return PriceSignal::Market;
    }

    let diff = market_diff_pct(listing);
    if diff > MARKET_BAND_PCT {
        PriceSignal::BelowMarket
    } else if diff < -MARKET_BAND_PCT {
        PriceSignal::AboveMarket
    } else {
        PriceSignal::Market
    }
}

pub(crate) fn demand_signal(listing: &ListingSnapshot) -> DemandLevel {
    listing.demand_level.unwrap_or(DemandLevel::Medium)
}

pub(crate) fn verdict_for(score: u8) -> Verdict {
    if score >= FITS_THRESHOLD {
        Verdict::Fits
    } else if score >= NEUTRAL_THRESHOLD {
        Verdict::Neutral
    } else {
        Verdict::NotFits
    }
}
