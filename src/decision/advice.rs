use super::domain::{DemandLevel, PriceSignal, Verdict};

pub const MAX_ADVICE_CHARS: usize = 120;

pub(crate) const BOOK_QUICKLY: &str = "good deal, book quickly.";
pub(crate) const GOOD_PRICE: &str = "good price for this area.";
pub(crate) const DECIDE_SOON: &str = "popular option, decide soon.";
pub(crate) const GOOD_OPTION: &str = "good option to book.";
pub(crate) const COMPARE_PRICE: &str = "compare with similar listings on price.";
pub(crate) const REVIEW_DETAILS: &str = "review the details before deciding.";
pub(crate) const CHEAPER_ELSEWHERE: &str = "cheaper options exist in this area.";
pub(crate) const CONSIDER_OTHERS: &str = "consider other options.";

/// First matching row wins; every verdict has a fallback row so the table is total.
pub(crate) fn main_advice(
    verdict: Verdict,
    price: PriceSignal,
    demand: DemandLevel,
) -> &'static str {
    use DemandLevel::High;
    use PriceSignal::{AboveMarket, BelowMarket};

    match (verdict, price, demand) {
        (Verdict::Fits, BelowMarket, High) => BOOK_QUICKLY,
        (Verdict::Fits, BelowMarket, _) => GOOD_PRICE,
        (Verdict::Fits, _, High) => DECIDE_SOON,
        (Verdict::Fits, _, _) => GOOD_OPTION,
        (Verdict::Neutral, AboveMarket, _) => COMPARE_PRICE,
        (Verdict::Neutral, _, _) => REVIEW_DETAILS,
        (Verdict::NotFits, AboveMarket, _) => CHEAPER_ELSEWHERE,
        (Verdict::NotFits, _, _) => CONSIDER_OTHERS,
    }
}
