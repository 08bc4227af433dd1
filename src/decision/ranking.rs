use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Decision, ListingId, ListingSnapshot, ViewerContext};
use super::validation::InvariantViolation;
use super::{evaluate, Evaluation};

/// Listing paired with its decision and 1-based position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedListing {
    pub position: usize,
    pub listing: ListingSnapshot,
    pub decision: Decision,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<InvariantViolation>,
}

pub(crate) fn evaluate_all(
    listings: &[ListingSnapshot],
    context: &ViewerContext,
) -> BTreeMap<ListingId, Evaluation> {
    listings
        .iter()
        .map(|listing| (listing.id.clone(), evaluate(listing, context)))
        .collect()
}

pub(crate) fn decide_all(
    listings: &[ListingSnapshot],
    context: &ViewerContext,
) -> BTreeMap<ListingId, Decision> {
    evaluate_all(listings, context)
        .into_iter()
        .map(|(id, evaluation)| (id, evaluation.decision))
        .collect()
}

/// Orders listings by descending match score. The sort is stable, so equal scores keep their
/// input order.
pub(crate) fn rank(listings: Vec<ListingSnapshot>, context: &ViewerContext) -> Vec<RankedListing> {
    let mut scored: Vec<(ListingSnapshot, Evaluation)> = listings
        .into_iter()
        .map(|listing| {
            let evaluation = evaluate(&listing, context);
            (listing, evaluation)
        })
        .collect();

    scored.sort_by_key(|(_, evaluation)| Reverse(evaluation.decision.match_score()));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (listing, evaluation))| RankedListing {
            position: index + 1,
            listing,
            decision: evaluation.decision,
            violations: evaluation.violations,
        })
        .collect()
}
