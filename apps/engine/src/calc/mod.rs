// Financial calculator - pure derivations over the input snapshot.
// Total over the numeric domain: degenerate inputs (zero comps, negative
// targets, negative equity) propagate arithmetically instead of erroring.

pub mod mortgage;
pub mod pricing;

pub use mortgage::{amortized_payment, total_monthly_carry, MortgageResult};
pub use pricing::{comp_average, instant_equity, offer_tiers, EquitySummary, OfferTiers};
