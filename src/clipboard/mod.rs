//! Clipboard support for lesson snippets.
//!
//! - `copy`: orchestrator trying platform tools in priority order
//! - `tools/`: one `CopyTool` per OS clipboard binary
//! - `indicator`: transient "copied" feedback with auto-expiry

mod copy;
mod error;
mod indicator;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use indicator::{CopyIndicator, DEFAULT_WINDOW};
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};

/// Copy text using the platform's clipboard tools.
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
