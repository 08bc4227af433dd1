//! Rule-based recommendations for rental listings: a pure decision engine plus the HTTP and
//! command-line surfaces that expose it.

pub mod cli;
pub mod config;
pub mod decision;
pub mod error;
pub mod http;
pub mod input;
mod server;
pub mod telemetry;

pub use decision::{
    Decision, DecisionEngine, DemandLevel, Evaluation, ListingId, ListingSnapshot, PriceSignal,
    RankedListing, Verdict, ViewerContext,
};
