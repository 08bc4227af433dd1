//! End-to-end scenarios through the public engine facade, mirroring how an HTTP handler or
//! data loader consumes decisions.

use std::io::Cursor;

use listing_advisor::decision::MAX_REASONS;
use listing_advisor::input::read_listings_csv;
use listing_advisor::{
    DecisionEngine, DemandLevel, ListingId, ListingSnapshot, PriceSignal, Verdict, ViewerContext,
};

fn sample_csv() -> &'static str {
    "id,title,price,city,rooms,beds,market_price,demand_level,quality_score,photo_count,description_length\n\
     riverside,Riverside studio,950,Ghent,1,1,1100,high,70,9,420\n\
     center,Center duplex,1650,Ghent,3,4,1500,medium,60,4,150\n\
     outskirts,Outskirts room,700,Aalst,1,1,,low,,1,\n\
     minimal,,1200,,,,,,,,\n"
}

fn viewer() -> ViewerContext {
    ViewerContext {
        price_min: Some(800.0),
        price_max: Some(1500.0),
        preferred_cities: vec!["Ghent".to_string()],
        guests: Some(1),
        searched_cities: vec!["ghent".to_string(), "Antwerp".to_string()],
    }
}

#[test]
fn csv_export_ranks_best_match_first() {
    let listings = read_listings_csv(Cursor::new(sample_csv())).expect("csv parses");
    let engine = DecisionEngine::new();

    let ranked = engine.rank_with_decisions(listings, Some(&viewer()));

    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].listing.id, ListingId::from("riverside"));
    assert_eq!(ranked[0].decision.verdict(), Verdict::Fits);
    assert_eq!(ranked[0].decision.price_signal(), PriceSignal::BelowMarket);
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].decision.match_score() >= pair[1].decision.match_score()));
}

#[test]
fn batch_covers_minimal_listings() {
    let listings = vec![
        ListingSnapshot::new("one", 1000.0),
        ListingSnapshot::new("two", 2000.0),
        ListingSnapshot::new("three", 3000.0),
    ];

    let decisions = DecisionEngine::new().decide_all(&listings, None);

    assert_eq!(decisions.len(), 3);
    for listing in &listings {
        let decision = decisions.get(&listing.id).expect("entry per listing");
        assert!(decision.reasons().len() <= MAX_REASONS);
        assert_eq!(decision.demand_signal(), DemandLevel::Medium);
    }
}

#[test]
fn over_budget_listing_reads_as_expensive() {
    let listing = ListingSnapshot {
        market_price: Some(8000.0),
        ..ListingSnapshot::new("penthouse", 10_000.0)
    };
    let context = ViewerContext {
        price_max: Some(8000.0),
        ..ViewerContext::default()
    };

    let decision = DecisionEngine::new().decide(&listing, Some(&context));

    assert_eq!(decision.verdict(), Verdict::NotFits);
    assert_eq!(decision.price_signal(), PriceSignal::AboveMarket);
    assert_eq!(decision.reasons().first().map(String::as_str), Some("price above average"));
    assert_eq!(decision.main_advice(), "cheaper options exist in this area.");
}

#[test]
fn rank_by_match_returns_same_listings() {
    let listings = read_listings_csv(Cursor::new(sample_csv())).expect("csv parses");
    let engine = DecisionEngine::new();

    let ranked = engine.rank_by_match(listings.clone(), Some(&viewer()));

    assert_eq!(ranked.len(), listings.len());
    for listing in &listings {
        assert!(ranked.contains(listing));
    }
}

#[test]
fn engine_validation_accepts_its_own_output() {
    let engine = DecisionEngine::new();
    let listings = read_listings_csv(Cursor::new(sample_csv())).expect("csv parses");

    for listing in &listings {
        let evaluation = engine.evaluate(listing, &viewer());
        assert!(evaluation.violations.is_empty());
        assert!(engine.validate(&evaluation.decision).is_empty());
    }
}
