//! Common types and utilities shared by the package layer, the PPTX layer
//! and the deck builders.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::RGBColor;
