// Report assembly - deterministic formatting of derived values and free
// text into the fixed nine-section report. All user text passes through the
// sanitizer before it can reach the renderer.

pub mod format;
pub mod sanitize;
pub mod sections;

pub use sections::{assemble_sections, ReportSection, SECTION_COUNT};
