use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for listings passed through the engine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Read-only view of a listing at decision time.
///
/// Only `id` and `price` are required. Every other attribute has a documented default in the
/// scoring rules, so a sparse snapshot still produces a decision. Prices and the quality score
/// accept fractional values since analytics reports averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSnapshot {
    pub id: ListingId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub title: Option<String>,
    pub price: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub rooms: Option<u8>,
    #[serde(default)]
    pub beds: Option<u8>,
    #[serde(default)]
    pub market_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_demand_level")]
    pub demand_level: Option<DemandLevel>,
    #[serde(default, deserialize_with = "clamped_quality_score")]
    pub quality_score: Option<f64>,
    #[serde(default)]
    pub photo_count: Option<u16>,
    #[serde(default)]
    pub description_length: Option<u32>,
}

impl ListingSnapshot {
    /// Minimal snapshot carrying only the required attributes.
    pub fn new(id: impl Into<String>, price: f64) -> Self {
        Self {
            id: ListingId(id.into()),
            title: None,
            price,
            city: None,
            rooms: None,
            beds: None,
            market_price: None,
            demand_level: None,
            quality_score: None,
            photo_count: None,
            description_length: None,
        }
    }

    /// Market reference price, ignoring a zero average that cannot anchor a comparison.
    pub(crate) fn known_market_price(&self) -> Option<f64> {
        self.market_price
            .filter(|price| price.is_finite() && *price > 0.0)
    }
}

/// Preferences supplied by the person browsing listings. Absent fields mean "no preference".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerContext {
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub preferred_cities: Vec<String>,
    #[serde(default)]
    pub guests: Option<u8>,
    #[serde(default)]
    pub searched_cities: Vec<String>,
}

impl ViewerContext {
    pub fn prefers_city(&self, city: Option<&str>) -> bool {
        city.map(|city| contains_city(&self.preferred_cities, city))
            .unwrap_or(false)
    }

    pub fn searched_city(&self, city: Option<&str>) -> bool {
        city.map(|city| contains_city(&self.searched_cities, city))
            .unwrap_or(false)
    }
}

fn contains_city(cities: &[String], city: &str) -> bool {
    let needle = city.trim().to_lowercase();
    !needle.is_empty()
        && cities
            .iter()
            .any(|candidate| candidate.trim().to_lowercase() == needle)
}

/// Coarse recommendation derived from the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Fits,
    Neutral,
    NotFits,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Fits => "fits",
            Verdict::Neutral => "neutral",
            Verdict::NotFits => "not_fits",
        }
    }
}

/// Position of the listing price relative to the market average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSignal {
    BelowMarket,
    Market,
    AboveMarket,
}

impl PriceSignal {
    pub fn label(&self) -> &'static str {
        match self {
            PriceSignal::BelowMarket => "below_market",
            PriceSignal::Market => "market",
            PriceSignal::AboveMarket => "above_market",
        }
    }
}

/// Demand bucket reported by analytics and echoed back as the decision's demand signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    pub fn label(&self) -> &'static str {
        match self {
            DemandLevel::Low => "low",
            DemandLevel::Medium => "medium",
            DemandLevel::High => "high",
        }
    }

    /// Parses an analytics label, tolerating case and surrounding whitespace.
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Immutable recommendation for one listing and viewer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    match_score: u8,
    verdict: Verdict,
    reasons: Vec<String>,
    price_signal: PriceSignal,
    demand_signal: DemandLevel,
    main_advice: String,
}

impl Decision {
    pub(crate) fn new(
        match_score: u8,
        verdict: Verdict,
        reasons: Vec<String>,
        price_signal: PriceSignal,
        demand_signal: DemandLevel,
        main_advice: String,
    ) -> Self {
        Self {
            match_score,
            verdict,
            reasons,
            price_signal,
            demand_signal,
            main_advice,
        }
    }

    pub fn match_score(&self) -> u8 {
        self.match_score
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn price_signal(&self) -> PriceSignal {
        self.price_signal
    }

    pub fn demand_signal(&self) -> DemandLevel {
        self.demand_signal
    }

    pub fn main_advice(&self) -> &str {
        &self.main_advice
    }
}

/// The four weighted components behind a match score, kept for audit trails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscoreBreakdown {
    pub price: f64,
    pub location: f64,
    pub demand: f64,
    pub quality: f64,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn lenient_demand_level<'de, D>(deserializer: D) -> Result<Option<DemandLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(DemandLevel::from_label))
}

/// Out-of-range scores are pulled into 0..=100; non-finite ones count as absent.
fn clamped_quality_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<f64>::deserialize(deserializer)?;
    Ok(opt
        .filter(|score| score.is_finite())
        .map(|score| score.clamp(0.0, 100.0)))
}
