/// Shapes on PowerPoint slides.
///
/// - `base`: any element of a slide's shape tree, classified by kind
/// - `textframe`: paragraphs and run formatting of a text shape
pub mod base;
pub mod textframe;

pub use base::{BaseShape, ShapeGeometry, ShapeKind};
pub use textframe::TextFrame;
