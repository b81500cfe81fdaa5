//! Input snapshot - the explicit, immutable form state for one generation.
//!
//! The interactive layer that owns widgets and buttons is out of scope; what
//! it hands over is this aggregate, captured once per generation. `Default`
//! impls carry the documented default value for every field, so a snapshot
//! built from an empty field map is already a complete, renderable session.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// UI slider lower bound for the annual interest rate, in percent.
/// Recorded for the embedding layer; the calculator does not enforce it.
pub const RATE_SLIDER_MIN_PCT: f64 = 3.0;
/// UI slider upper bound for the annual interest rate, in percent.
pub const RATE_SLIDER_MAX_PCT: f64 = 10.0;
/// Fixed amortization horizon. Every quote assumes a 30-year loan.
pub const LOAN_TERM_YEARS: u32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Component input structs
// ────────────────────────────────────────────────────────────────────────────

/// Who the portfolio is for and what they are chasing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientProfile {
    pub name: String,
    pub target_address: String,
    /// Free text - wants, needs, constraints. Sanitized at assembly time.
    pub stated_needs: String,
    /// Target AVM / list price the offer tiers anchor on.
    pub target_price: f64,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            name: "Jane Doe".to_string(),
            target_address: "11705 Farringdon Ave, Cleveland, OH 44105".to_string(),
            stated_needs: "First-time homeowner seeking a turn-key ranch. Priority on \
                           neighborhood safety and school boundaries."
                .to_string(),
            target_price: 78906.0,
        }
    }
}

/// The three comparable sale prices behind the CMA section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparableSet {
    pub comps: [f64; 3],
}

impl Default for ComparableSet {
    fn default() -> Self {
        Self {
            comps: [90000.0, 115000.0, 70000.0],
        }
    }
}

/// Negotiated loan inputs plus the direct monthly carry components.
///
/// `down_payment <= negotiated_price` is the expected shape but is not
/// enforced; validation belongs to the interactive layer, and a negative
/// loan amount simply propagates arithmetically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageTerms {
    pub negotiated_price: f64,
    pub down_payment: f64,
    /// Annual interest rate in percent (e.g. 6.30 for 6.30%).
    pub annual_rate_pct: f64,
    pub term_years: u32,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
}

impl Default for MortgageTerms {
    fn default() -> Self {
        Self {
            negotiated_price: 78906.0,
            down_payment: 2760.0,
            annual_rate_pct: 6.30,
            term_years: LOAN_TERM_YEARS,
            monthly_tax: 150.0,
            monthly_insurance: 130.0,
        }
    }
}

/// Market context for the narrative section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketNarrative {
    pub zipcode: String,
    /// Supply deficit in units, carried verbatim as entered (already
    /// comma-grouped by the user in practice).
    pub supply_deficit: String,
    /// `None` means "auto-generate from the stock template"; `Some` is the
    /// user-edited override.
    pub narrative: Option<String>,
}

impl Default for MarketNarrative {
    fn default() -> Self {
        Self {
            zipcode: "44105".to_string(),
            supply_deficit: "1,635".to_string(),
            narrative: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate snapshot
// ────────────────────────────────────────────────────────────────────────────

/// Everything one generation reads, captured as a single immutable value.
///
/// The calculator and assembler take this by reference and derive from it;
/// nothing in the pipeline mutates it, and nothing outlives the generated
/// byte stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSnapshot {
    pub client: ClientProfile,
    pub comps: ComparableSet,
    /// Free text for the CMA section ("Negotiation Points & Levers").
    pub negotiation_levers: String,
    pub mortgage: MortgageTerms,
    /// Final appraisal value; instant equity is appraisal minus price.
    pub appraisal_value: f64,
    pub market: MarketNarrative,
}

impl Default for PortfolioSnapshot {
    fn default() -> Self {
        Self {
            client: ClientProfile::default(),
            comps: ComparableSet::default(),
            negotiation_levers: "Direct-to-seller advantage (FSBO). Highlighting 'Safety Tax' \
                                 (deferred maintenance)."
                .to_string(),
            mortgage: MortgageTerms::default(),
            appraisal_value: 95000.0,
            market: MarketNarrative::default(),
        }
    }
}

impl PortfolioSnapshot {
    /// Builds a snapshot from a JSON field map, the shape the interactive
    /// layer ships its form state in. Missing fields fall back to their
    /// documented defaults; wrong types are the one rejectable condition.
    pub fn from_fields(fields: serde_json::Value) -> Result<Self, EngineError> {
        Ok(serde_json::from_value(fields)?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
