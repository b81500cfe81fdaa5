//! Loan amortization and monthly carry.
//!
//! Standard fixed-rate amortization: for monthly rate `r` over `n` months,
//! payment = principal * r * (1+r)^n / ((1+r)^n - 1).
//!
//! Zero-rate policy: a rate of zero (or below) yields a payment of 0.0, NOT
//! principal / n. The pinning test at the bottom of this file documents the
//! discrepancy against conventional amortization.

use serde::{Deserialize, Serialize};

use crate::models::snapshot::MortgageTerms;

// ────────────────────────────────────────────────────────────────────────────
// Derived value type
// ────────────────────────────────────────────────────────────────────────────

/// Everything the net-sheet section reports for one set of mortgage terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Negotiated price minus down payment. May go negative on degenerate
    /// input; propagated, not rejected.
    pub loan_amount: f64,
    /// Monthly principal and interest.
    pub p_and_i: f64,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
    /// P&I + tax + insurance.
    pub total_monthly: f64,
}

impl MortgageResult {
    /// Derives the full net sheet from the negotiated terms.
    pub fn from_terms(terms: &MortgageTerms) -> Self {
        let loan_amount = terms.negotiated_price - terms.down_payment;
        let p_and_i = amortized_payment(loan_amount, terms.annual_rate_pct, terms.term_years);
        Self {
            loan_amount,
            p_and_i,
            monthly_tax: terms.monthly_tax,
            monthly_insurance: terms.monthly_insurance,
            total_monthly: total_monthly_carry(p_and_i, terms.monthly_tax, terms.monthly_insurance),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Monthly principal-and-interest payment for a fixed-rate loan.
///
/// `annual_rate_pct` is the annual rate in percent (6.0 means 6%). A rate of
/// zero or below returns 0.0 by policy.
pub fn amortized_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate > 0.0 {
        let months = (years * 12) as i32;
        let growth = (1.0 + monthly_rate).powi(months);
        principal * (monthly_rate * growth) / (growth - 1.0)
    } else {
        0.0
    }
}

/// Total monthly carry: P&I plus the two direct inputs. Exact sum, no
/// validation.
pub fn total_monthly_carry(p_and_i: f64, tax: f64, insurance: f64) -> f64 {
    p_and_i + tax + insurance
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
