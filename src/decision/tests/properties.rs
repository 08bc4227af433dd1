use super::common::*;
use crate::decision::domain::{DemandLevel, ListingSnapshot, PriceSignal, Verdict, ViewerContext};
use crate::decision::reasons::{
    capacity_reason, DESIRED_AREA, LOW_DEMAND, PRICE_ABOVE_AVERAGE, PRICE_BELOW_MARKET,
};
use crate::decision::{MAX_ADVICE_CHARS, MAX_REASONS};

fn listing_variants() -> Vec<ListingSnapshot> {
    let mut variants = Vec::new();
    for price in price_grid() {
        for market_price in [None, Some(1000.0), Some(4000.0), Some(9000.0)] {
            for demand_level in [None, Some(DemandLevel::Low), Some(DemandLevel::High)] {
                for photo_count in [None, Some(1), Some(4), Some(9)] {
                    variants.push(ListingSnapshot {
                        market_price,
                        demand_level,
                        photo_count,
                        ..listing("variant", price)
                    });
                }
            }
        }
    }
    variants
}

#[test]
fn outputs_respect_bounds_for_all_variants() {
    let engine = engine();
    for context in contexts() {
        for listing in listing_variants() {
            let evaluation = engine.evaluate(&listing, &context);
            let decision = &evaluation.decision;

            assert!(decision.match_score() <= 100);
            assert!(decision.reasons().len() <= MAX_REASONS);
            assert!(decision.main_advice().chars().count() <= MAX_ADVICE_CHARS);
            assert!(evaluation.violations.is_empty(), "{:?}", evaluation.violations);
        }
    }
}

#[test]
fn verdict_tracks_score_bands() {
    let engine = engine();
    for context in contexts() {
        for listing in listing_variants() {
            let decision = engine.decide(&listing, Some(&context));
            let score = decision.match_score();

            assert_eq!(decision.verdict() == Verdict::Fits, score >= 75);
            assert_eq!(decision.verdict() == Verdict::NotFits, score < 50);
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let engine = engine();
    let (listing, context) = strong_match();

    let first = engine.evaluate(&listing, &context);
    let second = engine.evaluate(&listing, &context);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.decision).expect("serializes"),
        serde_json::to_string(&second.decision).expect("serializes")
    );
}

#[test]
fn lowering_price_never_lowers_score() {
    let engine = engine();
    for context in contexts() {
        let mut previous: Option<u8> = None;
        // Walk prices downward against a fixed market reference.
        for price in price_grid().into_iter().rev() {
            let listing = ListingSnapshot {
                market_price: Some(6000.0),
                ..listing("monotone", price)
            };
            let score = engine.decide(&listing, Some(&context)).match_score();
            if let Some(previous) = previous {
                assert!(
                    score >= previous,
                    "price {price} scored {score}, below {previous} at a higher price"
                );
            }
            previous = Some(score);
        }
    }
}

#[test]
fn fits_verdict_suppresses_above_average_price() {
    let (base, context) = strong_match();
    let listing = ListingSnapshot {
        price: 1060.0,
        market_price: Some(1000.0),
        quality_score: Some(100.0),
        ..base
    };

    let decision = engine().decide(&listing, Some(&context));

    assert_eq!(decision.price_signal(), PriceSignal::AboveMarket);
    assert_eq!(decision.verdict(), Verdict::Fits);
    assert!(!decision.reasons().iter().any(|reason| reason == PRICE_ABOVE_AVERAGE));
}

#[test]
fn fits_verdict_suppresses_low_demand() {
    let (base, context) = strong_match();
    let listing = ListingSnapshot {
        demand_level: Some(DemandLevel::Low),
        quality_score: Some(100.0),
        ..base
    };
    let context = ViewerContext {
        price_min: None,
        price_max: None,
        ..context
    };

    let decision = engine().decide(&listing, Some(&context));

    assert_eq!(decision.demand_signal(), DemandLevel::Low);
    assert_eq!(decision.match_score(), 75);
    assert_eq!(decision.verdict(), Verdict::Fits);
    assert_eq!(
        decision.reasons(),
        [
            PRICE_BELOW_MARKET.to_string(),
            DESIRED_AREA.to_string(),
            capacity_reason(2),
        ]
    );
}

#[test]
fn fits_verdicts_across_variants_carry_no_negative_reasons() {
    let engine = engine();
    for context in contexts() {
        for listing in listing_variants() {
            let decision = engine.decide(&listing, Some(&context));
            if decision.verdict() == Verdict::Fits {
                assert!(!decision
                    .reasons()
                    .iter()
                    .any(|reason| reason == PRICE_ABOVE_AVERAGE || reason == LOW_DEMAND));
            }
        }
    }
}
