//! Real-estate negotiation portfolio engine.
//!
//! Turns a single-session snapshot of negotiation inputs (client profile,
//! comparable sales, offer anchors, mortgage terms, market narrative) into a
//! fixed nine-section PDF portfolio.
//!
//! Flow: snapshot -> financial derivations -> nine titled sections -> PDF
//! bytes. Everything is synchronous and pure in-memory; the crate performs no
//! I/O, and the embedding application decides how to deliver the artifact.

pub mod calc;
pub mod errors;
pub mod generate;
pub mod models;
pub mod render;
pub mod report;

pub use errors::EngineError;
pub use generate::{generate_portfolio, generate_portfolio_at, PortfolioArtifact};
pub use models::snapshot::PortfolioSnapshot;
pub use report::sections::ReportSection;
