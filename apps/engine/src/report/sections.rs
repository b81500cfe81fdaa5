//! Nine-section report assembly.
//!
//! Takes a read-only snapshot, derives the financial values, and produces
//! the fixed ordered sequence of titled sections. Sections exist only
//! between generation and rendering; nothing is retained across runs.

use serde::{Deserialize, Serialize};

use crate::calc::{comp_average, instant_equity, offer_tiers, MortgageResult};
use crate::models::snapshot::PortfolioSnapshot;
use crate::report::format::{currency_0dp, currency_2dp};
use crate::report::sanitize::sanitize;

/// The report is always exactly this many sections, in a fixed order.
pub const SECTION_COUNT: usize = 9;

/// One titled page of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub body: String,
}

// Fixed copy. Sections 7-9 are boilerplate placeholders independent of the
// session; the note closes section 2.
const SAFETY_TAX_NOTE: &str =
    "Note: Strategy based on 'Safety Tax' deferred maintenance leverage.";
const MARKET_TRENDS_BODY: &str = "Detailed supply/demand analytics and price action charts.";
const NEIGHBORHOOD_BODY: &str = "Heatmaps showing safety ratings and school boundaries.";
const FOLLOW_UP_BODY: &str = "Scheduled review of local equity growth.";

/// Stock market-analysis narrative, used when the user has not edited it.
pub fn default_narrative(snapshot: &PortfolioSnapshot) -> String {
    let price = snapshot.mortgage.negotiated_price;
    let equity = instant_equity(snapshot.appraisal_value, price).equity;
    format!(
        "The {} market has a {}-unit supply deficit. While the neighborhood median is $95k, \
         we are securing this home at the {} anchor. You are walking into this home with over \
         {} in wealth already created.",
        snapshot.market.zipcode,
        snapshot.market.supply_deficit,
        currency_0dp(price),
        currency_0dp(equity),
    )
}

/// Assembles the nine sections from one snapshot.
///
/// Every body is sanitized before it leaves this module, so the renderer
/// only ever sees Latin-1-representable text.
pub fn assemble_sections(snapshot: &PortfolioSnapshot) -> Vec<ReportSection> {
    let tiers = offer_tiers(snapshot.client.target_price);
    let mortgage = MortgageResult::from_terms(&snapshot.mortgage);
    let equity = instant_equity(snapshot.appraisal_value, snapshot.mortgage.negotiated_price);
    let avg_comp = comp_average(&snapshot.comps.comps);
    let narrative = snapshot
        .market
        .narrative
        .clone()
        .unwrap_or_else(|| default_narrative(snapshot));

    let pages = [
        (
            "1. Strategy & Consultation",
            format!(
                "CLIENT: {}\nADDRESS: {}\n\nSTRATEGY: {}",
                snapshot.client.name, snapshot.client.target_address, snapshot.client.stated_needs
            ),
        ),
        (
            "2. Offer Logic Tiers",
            format!(
                "AGGRESSIVE: {}\nFAIR MARKET: {}\nSAFETY CEILING: {}\n\n{}",
                currency_0dp(tiers.aggressive),
                currency_0dp(tiers.fair),
                currency_0dp(tiers.safety),
                SAFETY_TAX_NOTE
            ),
        ),
        (
            "3. Financial & Equity Summary",
            format!(
                "OFFER PRICE: {}\nAPPRAISAL VALUE: {}\n\nPROJECTED INSTANT EQUITY: {}",
                currency_0dp(equity.negotiated_price),
                currency_0dp(equity.appraisal),
                currency_0dp(equity.equity)
            ),
        ),
        (
            "4. Monthly Carry & Net Sheet",
            format!(
                "MONTHLY P&I: {}\nESTIMATED TAX/INS: {}\n\nTOTAL MONTHLY ALL-IN: {}",
                currency_2dp(mortgage.p_and_i),
                currency_2dp(mortgage.monthly_tax + mortgage.monthly_insurance),
                currency_2dp(mortgage.total_monthly)
            ),
        ),
        (
            "5. Market Intelligence & Narrative",
            format!(
                "ZIPCODE: {}\nSUPPLY DEFICIT: {} UNITS\n\nMARKET ANALYSIS:\n{}",
                snapshot.market.zipcode, snapshot.market.supply_deficit, narrative
            ),
        ),
        (
            "6. Comparative Market Analysis",
            format!(
                "MARKET AVERAGE BASED ON COMPS: {}\n\nNEGOTIATION LEVERS:\n{}",
                currency_0dp(avg_comp),
                snapshot.negotiation_levers
            ),
        ),
        (
            "7. Altos Research: Market Trends",
            MARKET_TRENDS_BODY.to_string(),
        ),
        (
            "8. Neighborhood Expert Report",
            NEIGHBORHOOD_BODY.to_string(),
        ),
        (
            "9. 90-Day Follow-up & Planning",
            FOLLOW_UP_BODY.to_string(),
        ),
    ];

    pages
        .into_iter()
        .map(|(title, body)| ReportSection {
            title: title.to_string(),
            body: sanitize(&body),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
