//! The SKIFIN company deck and the structure report.
//!
//! - [`builder`]: one function per slide template
//! - [`assembler`]: the fixed slide sequence of the deck
//! - [`dump`]: text report of an existing deck's shapes and layouts

pub mod assembler;
pub mod builder;
pub mod dump;
pub mod palette;

pub use builder::Template;
pub use dump::DumpOutcome;
pub use palette::Palette;
