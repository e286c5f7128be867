/// Open Packaging Conventions (OPC) implementation.
///
/// The container layer under every `.pptx`: a ZIP archive of parts, a
/// `[Content_Types].xml` map and `.rels` relationship files.
///
/// - `phys_pkg` reads and writes the ZIP members (`zip`, deflate)
/// - `pkgreader` walks the relationship graph from the package root
/// - `pkgwriter` emits content types, relationships and parts
/// - `package` is the in-memory part graph both sides meet in
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part, XmlPart};
pub use rel::{Relationship, Relationships};
