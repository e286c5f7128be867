//! Deckhand - build and inspect PowerPoint (.pptx) slide decks
//!
//! This library carries a small PresentationML stack on top of the Open
//! Packaging Conventions, plus the templated company deck built with it.
//!
//! # Features
//!
//! - **OPC layer**: read and write ZIP packages, parts, relationships and content types
//! - **PPTX writer**: slides of formatted text boxes with solid backgrounds,
//!   saved as a complete package with master, layouts and theme
//! - **PPTX reader**: slides, shapes (classified by kind), text, paragraph
//!   formatting, backgrounds and layouts
//! - **Deck templates**: title, overview, practice, section, content,
//!   two-column and stats slides
//! - **Structure report**: a plain-text dump of a deck's shapes and layouts
//!
//! # Example - Building a deck
//!
//! ```no_run
//! use deckhand::deck::builder::{add_section_slide, add_title_slide};
//! use deckhand::ooxml::pptx::MutablePresentation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut deck = MutablePresentation::new();
//! add_title_slide(&mut deck, "Quarterly Review", "Q3 results")?;
//! add_section_slide(&mut deck, "Highlights")?;
//! deck.save("review.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a PPTX file
//!
//! ```no_run
//! use deckhand::ooxml::pptx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("presentation.pptx")?;
//! let pres = pkg.presentation()?;
//!
//! for slide in pres.slides()? {
//!     for shape in slide.shapes()? {
//!         if let Some(text) = shape.text()? {
//!             println!("[{}] {}", shape.kind(), text);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Shared types: errors, colours, units and XML escaping
pub mod common;

/// The templated deck, its assembly and the structure report
pub mod deck;

/// OOXML (Office Open XML) packaging and PresentationML
///
/// This module provides the OPC package layer and the .pptx reader and writer.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, RGBColor, Result};
pub use ooxml::pptx::{MutablePresentation, Package, Presentation};
