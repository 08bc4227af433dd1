use std::fmt;

use serde::Serialize;

use super::advice::MAX_ADVICE_CHARS;
use super::domain::{Decision, Verdict};
use super::reasons::MAX_REASONS;
use super::signals::verdict_for;

/// Contract drift detected on an assembled decision. Reported, never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvariantViolation {
    TooManyReasons { count: usize },
    DuplicateReason { reason: String },
    AdviceTooLong { length: usize },
    ScoreOutOfRange { score: u8 },
    VerdictMismatch { score: u8, verdict: Verdict },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::TooManyReasons { count } => {
                write!(f, "{count} reasons exceed the limit of {MAX_REASONS}")
            }
            InvariantViolation::DuplicateReason { reason } => {
                write!(f, "reason '{reason}' appears more than once")
            }
            InvariantViolation::AdviceTooLong { length } => write!(
                f,
                "advice is {length} characters, limit is {MAX_ADVICE_CHARS}"
            ),
            InvariantViolation::ScoreOutOfRange { score } => {
                write!(f, "match score {score} is outside 0..=100")
            }
            InvariantViolation::VerdictMismatch { score, verdict } => write!(
                f,
                "verdict {} does not match score {score}",
                verdict.label()
            ),
        }
    }
}

pub(crate) fn check_decision(decision: &Decision) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let reasons = decision.reasons();
    if reasons.len() > MAX_REASONS {
        violations.push(InvariantViolation::TooManyReasons {
            count: reasons.len(),
        });
    }

    for (index, reason) in reasons.iter().enumerate() {
        if reasons[..index].contains(reason) {
            violations.push(InvariantViolation::DuplicateReason {
                reason: reason.clone(),
            });
        }
    }

    let length = decision.main_advice().chars().count();
    if length > MAX_ADVICE_CHARS {
        violations.push(InvariantViolation::AdviceTooLong { length });
    }

    let score = decision.match_score();
    if score > 100 {
        violations.push(InvariantViolation::ScoreOutOfRange { score });
    }

    if verdict_for(score) != decision.verdict() {
        violations.push(InvariantViolation::VerdictMismatch {
            score,
            verdict: decision.verdict(),
        });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::domain::{DemandLevel, PriceSignal};

    fn decision(score: u8, verdict: Verdict, reasons: &[&str], advice: &str) -> Decision {
        Decision::new(
            score,
            verdict,
            reasons.iter().map(|reason| reason.to_string()).collect(),
            PriceSignal::Market,
            DemandLevel::Medium,
            advice.to_string(),
        )
    }

    #[test]
    fn well_formed_decision_has_no_violations() {
        let decision = decision(60, Verdict::Neutral, &["high demand"], "Review the details.");
        assert!(check_decision(&decision).is_empty());
    }

    #[test]
    fn reports_every_violation_without_rejecting() {
        let long_advice = "x".repeat(121);
        let decision = decision(
            130,
            Verdict::Neutral,
            &["a", "b", "a", "c"],
            &long_advice,
        );

        let violations = check_decision(&decision);

        assert!(violations.contains(&InvariantViolation::TooManyReasons { count: 4 }));
        assert!(violations.contains(&InvariantViolation::DuplicateReason {
            reason: "a".to_string()
        }));
        assert!(violations.contains(&InvariantViolation::AdviceTooLong { length: 121 }));
        assert!(violations.contains(&InvariantViolation::ScoreOutOfRange { score: 130 }));
        assert!(violations.contains(&InvariantViolation::VerdictMismatch {
            score: 130,
            verdict: Verdict::Neutral
        }));
        assert_eq!(decision.match_score(), 130);
    }

    #[test]
    fn advice_length_counts_characters_not_bytes() {
        let advice = "é".repeat(MAX_ADVICE_CHARS);
        let decision = decision(10, Verdict::NotFits, &[], &advice);
        assert!(check_decision(&decision).is_empty());
    }

    #[test]
    fn violation_messages_are_readable() {
        let message = InvariantViolation::TooManyReasons { count: 5 }.to_string();
        assert_eq!(message, "5 reasons exceed the limit of 3");
    }
}
