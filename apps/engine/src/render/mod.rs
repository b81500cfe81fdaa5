// Document renderer - serializes assembled sections into a paginated PDF.
// Pure in-memory: the renderer never touches disk; the caller owns delivery
// of the byte stream.

pub mod metrics;
pub mod pdf;

pub use metrics::{get_metrics, CoreFont};
pub use pdf::PortfolioPdf;
