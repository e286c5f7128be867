//! XML helpers shared by the writers and readers.

pub mod escape;

pub use escape::{escape_xml, escape_xml_into, named_entity};
