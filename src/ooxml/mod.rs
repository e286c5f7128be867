//! Office Open XML support.
//!
//! - [`opc`]: the Open Packaging Conventions layer (ZIP container, parts,
//!   relationships, content types)
//! - [`pptx`]: PresentationML reading and writing on top of it

pub mod error;
pub mod opc;
pub mod pptx;

pub use opc::{OpcPackage, PackURI};

pub use error::{OoxmlError, Result};
