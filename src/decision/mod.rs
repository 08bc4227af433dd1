//! Rule-based decision engine turning a listing snapshot and viewer preferences into a bounded,
//! human-readable recommendation.
//!
//! The pipeline is pure: subscores and signals are derived from the raw inputs, combined into a
//! match score and verdict, then explained with reasons and one advice sentence. Invariant
//! checks run after assembly and are returned to the caller rather than enforced.

mod advice;
pub mod domain;
mod ranking;
mod reasons;
mod signals;
mod subscores;
mod validation;

#[cfg(test)]
mod tests;

pub use advice::MAX_ADVICE_CHARS;
pub use domain::{
    Decision, DemandLevel, ListingId, ListingSnapshot, PriceSignal, SubscoreBreakdown, Verdict,
    ViewerContext,
};
pub use ranking::RankedListing;
pub use reasons::MAX_REASONS;
pub use validation::InvariantViolation;

use std::collections::BTreeMap;

use reasons::ReasonInputs;
use serde::Serialize;

/// Stateless facade over the decision pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, listing: &ListingSnapshot, context: &ViewerContext) -> Evaluation {
        evaluate(listing, context)
    }

    pub fn decide(&self, listing: &ListingSnapshot, context: Option<&ViewerContext>) -> Decision {
        let no_preferences = ViewerContext::default();
        evaluate(listing, context.unwrap_or(&no_preferences)).decision
    }

    /// Full evaluations keyed by listing identifier, with the same collapsing as `decide_all`.
    pub fn evaluate_all(
        &self,
        listings: &[ListingSnapshot],
        context: &ViewerContext,
    ) -> BTreeMap<ListingId, Evaluation> {
        ranking::evaluate_all(listings, context)
    }

    /// One entry per distinct listing identifier; a repeated identifier keeps its last decision.
    pub fn decide_all(
        &self,
        listings: &[ListingSnapshot],
        context: Option<&ViewerContext>,
    ) -> BTreeMap<ListingId, Decision> {
        let no_preferences = ViewerContext::default();
        ranking::decide_all(listings, context.unwrap_or(&no_preferences))
    }

    pub fn rank_by_match(
        &self,
        listings: Vec<ListingSnapshot>,
        context: Option<&ViewerContext>,
    ) -> Vec<ListingSnapshot> {
        self.rank_with_decisions(listings, context)
            .into_iter()
            .map(|entry| entry.listing)
            .collect()
    }

    pub fn rank_with_decisions(
        &self,
        listings: Vec<ListingSnapshot>,
        context: Option<&ViewerContext>,
    ) -> Vec<RankedListing> {
        let no_preferences = ViewerContext::default();
        ranking::rank(listings, context.unwrap_or(&no_preferences))
    }

    /// Re-checks a decision against the output contract.
    pub fn validate(&self, decision: &Decision) -> Vec<InvariantViolation> {
        validation::check_decision(decision)
    }
}

/// Decision plus the audit data produced while computing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub decision: Decision,
    pub subscores: SubscoreBreakdown,
    pub violations: Vec<InvariantViolation>,
}

pub(crate) fn evaluate(listing: &ListingSnapshot, context: &ViewerContext) -> Evaluation {
    let breakdown = subscores::subscores(listing, context);
    let match_score = subscores::composite_score(&breakdown);
    let verdict = signals::verdict_for(match_score);
    let price_signal = signals::price_signal(listing);
    let demand_signal = signals::demand_signal(listing);

    let reasons = reasons::generate_reasons(
        listing,
        context,
        &ReasonInputs {
            verdict,
            price_signal,
            demand_signal,
        },
    );
    let main_advice = advice::main_advice(verdict, price_signal, demand_signal);

    let decision = Decision::new(
        match_score,
        verdict,
        reasons,
        price_signal,
        demand_signal,
        main_advice.to_string(),
    );
    let violations = validation::check_decision(&decision);

    Evaluation {
        decision,
        subscores: breakdown,
        violations,
    }
}
