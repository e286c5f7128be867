//! Styling primitives shared by the writer and reader.

pub mod color;

pub use color::RGBColor;
