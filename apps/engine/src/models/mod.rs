pub mod snapshot;

pub use snapshot::{
    ClientProfile, ComparableSet, MarketNarrative, MortgageTerms, PortfolioSnapshot,
};
