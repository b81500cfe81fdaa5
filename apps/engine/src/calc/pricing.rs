//! Pricing math - comp averaging, offer tier anchors, instant equity.

use serde::{Deserialize, Serialize};

/// Aggressive tier multiplier: 5% under the target price.
pub const AGGRESSIVE_MULTIPLIER: f64 = 0.95;
/// Safety tier multiplier: 5% over the target price (multi-offer ceiling).
pub const SAFETY_MULTIPLIER: f64 = 1.05;

// ────────────────────────────────────────────────────────────────────────────
// Derived value types
// ────────────────────────────────────────────────────────────────────────────

/// The three pre-computed negotiation anchor prices.
///
/// For any non-negative target, `aggressive <= fair <= safety`. A negative
/// target inverts the ordering; that is degenerate input passed through
/// untouched, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferTiers {
    pub aggressive: f64,
    pub fair: f64,
    pub safety: f64,
}

/// Appraisal vs. negotiated price at closing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquitySummary {
    pub appraisal: f64,
    pub negotiated_price: f64,
    /// Negative when the client paid over appraisal. A reportable fact,
    /// not an error.
    pub equity: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Derivations
// ────────────────────────────────────────────────────────────────────────────

/// Arithmetic mean of the three comparable sale prices. No rounding here;
/// rounding happens once, at display time.
pub fn comp_average(comps: &[f64; 3]) -> f64 {
    (comps[0] + comps[1] + comps[2]) / 3.0
}

/// Derives the three offer anchors from the target price. Fair market is the
/// target itself; the other two are fixed percentage offsets. No clamping.
pub fn offer_tiers(target_price: f64) -> OfferTiers {
    OfferTiers {
        aggressive: target_price * AGGRESSIVE_MULTIPLIER,
        fair: target_price,
        safety: target_price * SAFETY_MULTIPLIER,
    }
}

/// Instant equity: appraisal minus negotiated price, sign preserved.
pub fn instant_equity(appraisal: f64, negotiated_price: f64) -> EquitySummary {
    EquitySummary {
        appraisal,
        negotiated_price,
        equity: appraisal - negotiated_price,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comp_average_is_arithmetic_mean() {
        let avg = comp_average(&[90000.0, 115000.0, 70000.0]);
        assert!((avg - 275000.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_comp_average_commutative_under_permutation() {
        let a = comp_average(&[90000.0, 115000.0, 70000.0]);
        let b = comp_average(&[70000.0, 90000.0, 115000.0]);
        let c = comp_average(&[115000.0, 70000.0, 90000.0]);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_comp_average_zero_comps_is_zero() {
        assert_eq!(comp_average(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_offer_tiers_multipliers() {
        let tiers = offer_tiers(78906.0);
        assert!((tiers.aggressive - 78906.0 * 0.95).abs() < 1e-9);
        assert_eq!(tiers.fair, 78906.0);
        assert!((tiers.safety - 78906.0 * 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_offer_tiers_ordering_for_positive_target() {
        let tiers = offer_tiers(250000.0);
        assert!(tiers.aggressive <= tiers.fair);
        assert!(tiers.fair <= tiers.safety);
    }

    #[test]
    fn test_offer_tiers_negative_target_propagates() {
        // Degenerate but arithmetically consistent: no clamping.
        let tiers = offer_tiers(-100.0);
        assert_eq!(tiers.aggressive, -95.0);
        assert_eq!(tiers.fair, -100.0);
        assert_eq!(tiers.safety, -105.0);
    }

    #[test]
    fn test_instant_equity_sign_behavior() {
        assert!(instant_equity(95000.0, 78906.0).equity > 0.0);
        assert_eq!(instant_equity(95000.0, 95000.0).equity, 0.0);
        assert!(instant_equity(90000.0, 95000.0).equity < 0.0);
    }

    #[test]
    fn test_instant_equity_default_session_value() {
        let summary = instant_equity(95000.0, 78906.0);
        assert_eq!(summary.equity, 16094.0);
    }
}
