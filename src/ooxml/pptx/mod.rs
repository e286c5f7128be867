//! PowerPoint (.pptx) presentation support.
//!
//! Two halves share the formatting types in [`format`] and [`backgrounds`]:
//!
//! - Reading: [`Package`] opens a file, [`Presentation`] lists slides,
//!   masters and layouts, and each [`Slide`] yields classified shapes.
//! - Writing: [`MutablePresentation`] collects slides of text boxes and
//!   serializes a complete package built on the stock master and layouts
//!   from [`template`].
//!
//! # Example
//!
//! ```rust,no_run
//! use deckhand::ooxml::pptx::Package;
//!
//! let package = Package::open("presentation.pptx")?;
//! let pres = package.presentation()?;
//!
//! for (i, slide) in pres.slides()?.iter().enumerate() {
//!     println!("Slide {}: {}", i + 1, slide.text()?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod parts;
pub mod presentation;
pub mod shapes;
pub mod slide;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{Alignment, TextParagraph};
pub use package::Package;
pub use presentation::Presentation;
pub use shapes::{BaseShape, ShapeGeometry, ShapeKind, TextFrame};
pub use slide::{Slide, SlideLayout, SlideMaster};
pub use writer::{MutablePresentation, MutableShape, MutableSlide};
