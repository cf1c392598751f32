//! Import remapping sub-system.
//!
//! Sub-modules:
//! - [`loader`]     — Parses a flat `remappings.txt` into ordered rewrite rules.
//! - [`preprocess`] — Applies the rules line-by-line to source text before an
//!   external compiler consumes it.

pub mod loader;
pub mod preprocess;

// Top-level re-exports.
pub use loader::{load_remappings, parse_remappings, RemappingRule};
pub use preprocess::{transform_line, transform_source};
