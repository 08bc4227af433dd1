use super::domain::{DemandLevel, ListingSnapshot, PriceSignal, Verdict, ViewerContext};
use super::subscores::{GOOD_PHOTO_COUNT, MIN_PHOTO_COUNT};

pub const MAX_REASONS: usize = 3;

pub(crate) const PRICE_BELOW_MARKET: &str = "price below market";
pub(crate) const PRICE_ABOVE_AVERAGE: &str = "price above average";
pub(crate) const FITS_BUDGET: &str = "fits the budget";
pub(crate) const DESIRED_AREA: &str = "in the desired area";
pub(crate) const HIGH_DEMAND: &str = "high demand";
pub(crate) const LOW_DEMAND: &str = "low demand";
pub(crate) const GOOD_PHOTOS: &str = "good photos";
pub(crate) const FEW_PHOTOS: &str = "few photos";

/// Inputs the reason rules read besides the listing and viewer context.
pub(crate) struct ReasonInputs {
    pub verdict: Verdict,
    pub price_signal: PriceSignal,
    pub demand_signal: DemandLevel,
}

/// Builds the candidate reasons in fixed priority order, then keeps the first three.
///
/// Negative reasons (pricier than average, low demand) are suppressed when the verdict is
/// already `fits` so the list never argues against the recommendation.
pub(crate) fn generate_reasons(
    listing: &ListingSnapshot,
    context: &ViewerContext,
    inputs: &ReasonInputs,
) -> Vec<String> {
    let positive = inputs.verdict == Verdict::Fits;
    let mut reasons = ReasonList::default();

    match inputs.price_signal {
        PriceSignal::BelowMarket => reasons.push(PRICE_BELOW_MARKET),
        PriceSignal::AboveMarket if !positive => reasons.push(PRICE_ABOVE_AVERAGE),
        _ => {}
    }

    if context.price_max.is_some_and(|max| listing.price <= max) {
        reasons.push(FITS_BUDGET);
    }

    if context.prefers_city(listing.city.as_deref()) {
        reasons.push(DESIRED_AREA);
    }

    match inputs.demand_signal {
        DemandLevel::High => reasons.push(HIGH_DEMAND),
        DemandLevel::Low if !positive => reasons.push(LOW_DEMAND),
        _ => {}
    }

    if let (Some(guests), Some(beds)) = (context.guests, listing.beds) {
        if beds >= guests {
            reasons.push(capacity_reason(guests));
        }
    }

    match listing.photo_count {
        Some(count) if count >= GOOD_PHOTO_COUNT => reasons.push(GOOD_PHOTOS),
        Some(count) if count >= MIN_PHOTO_COUNT => {}
        _ => reasons.push(FEW_PHOTOS),
    }

    reasons.finish()
}

pub(crate) fn capacity_reason(guests: u8) -> String {
    if guests == 1 {
        "room for 1 guest".to_string()
    } else {
        format!("room for {guests} guests")
    }
}

#[derive(Default)]
struct ReasonList {
    items: Vec<String>,
}

impl ReasonList {
    fn push(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        if !self.items.contains(&reason) {
            self.items.push(reason);
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.items.truncate(MAX_REASONS);
        self.items
    }
}
