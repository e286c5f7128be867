//! In-memory OPC package: parts keyed by partname plus package-level relationships.

use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::{Part, PartFactory};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::{Read, Seek};
use std::path::Path;

/// An Open Packaging Convention package.
///
/// Parts are kept sorted by partname so a saved package always lists its
/// members in the same order.
#[derive(Debug)]
pub struct OpcPackage {
    rels: Relationships,
    parts: BTreeMap<PackURI, Box<dyn Part>>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            rels: Relationships::new("/"),
            parts: BTreeMap::new(),
        }
    }

    /// Open a package from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::open(path)?)
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::from_reader(reader)?)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::from_bytes(data)?)
    }

    fn from_phys_reader(phys: PhysPkgReader) -> Result<Self> {
        let (rels, sparts) = PackageReader::from_phys_reader(phys)?.into_parts();

        let mut parts = BTreeMap::new();
        for spart in sparts {
            let part = PartFactory::load(
                spart.partname.clone(),
                spart.content_type,
                spart.blob,
                spart.rels,
            )?;
            parts.insert(spart.partname, part);
        }

        Ok(Self { rels, parts })
    }

    /// The part the package's officeDocument relationship points at.
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        self.part_by_reltype(relationship_type::OFFICE_DOCUMENT)
    }

    /// The target of the first package-level relationship of `reltype`.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&dyn Part> {
        let rel = self
            .rels
            .first_of_type(reltype)
            .ok_or_else(|| OpcError::RelationshipNotFound(reltype.to_string()))?;
        let partname = self.rels.target_partname(rel.r_id())?;
        self.get_part(&partname)
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .get(partname)
            .map(|b| &**b)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Resolve `r_id` on `source` to the related part.
    pub fn related_part(&self, source: &dyn Part, r_id: &str) -> Result<&dyn Part> {
        let partname = source.rels().target_partname(r_id)?;
        self.get_part(&partname)
    }

    /// Add a part, replacing any part with the same partname.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        self.parts.insert(part.partname().clone(), part);
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|b| &**b)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to `partname`, returning the rId.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        let target_ref = partname.relative_ref("/");
        self.rels.get_or_add(reltype, &target_ref)
    }

    /// Serialize the package to ZIP bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Write the package to `path`. The parent directory must already exist.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;
    use crate::ooxml::opc::part::XmlPart;
    use std::io::{Cursor, Write};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn minimal_pptx() -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer.start_file("[Content_Types].xml", options).unwrap();
        writer
            .write_all(
                br#"<?xml version="1.0"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slides/slide1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>
</Types>"#,
            )
            .unwrap();

        writer.start_file("_rels/.rels", options).unwrap();
        writer
            .write_all(
                br#"<?xml version="1.0"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#,
            )
            .unwrap();

        writer.start_file("ppt/_rels/presentation.xml.rels", options).unwrap();
        writer
            .write_all(
                br#"<?xml version="1.0"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"/>
</Relationships>"#,
            )
            .unwrap();

        writer.start_file("ppt/presentation.xml", options).unwrap();
        writer.write_all(b"<p:presentation/>").unwrap();
        writer.start_file("ppt/slides/slide1.xml", options).unwrap();
        writer.write_all(b"<p:sld/>").unwrap();
        // Unreachable from the relationship graph, so never loaded
        writer.start_file("ppt/orphan.xml", options).unwrap();
        writer.write_all(b"<orphan/>").unwrap();

        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_open_package() {
        let pkg = OpcPackage::from_bytes(minimal_pptx()).unwrap();
        assert_eq!(pkg.part_count(), 2);

        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);

        let slide = pkg.related_part(main, "rId2").unwrap();
        assert_eq!(slide.partname().as_str(), "/ppt/slides/slide1.xml");
        assert_eq!(slide.content_type(), ct::PML_SLIDE);
    }

    #[test]
    fn test_save_and_reopen() {
        let mut pkg = OpcPackage::new();
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(Box::new(XmlPart::from_string(
            partname.clone(),
            ct::PML_PRESENTATION_MAIN,
            String::from("<p:presentation/>"),
        )));
        assert_eq!(pkg.relate_to(&partname, relationship_type::OFFICE_DOCUMENT), "rId1");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        pkg.save(&path).unwrap();

        let reopened = OpcPackage::open(&path).unwrap();
        assert_eq!(reopened.main_document_part().unwrap().blob(), b"<p:presentation/>");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = OpcPackage::new();
        let err = pkg.save(dir.path().join("no/such/dir/deck.pptx")).unwrap_err();
        assert!(matches!(err, OpcError::IoError(_)));
    }
}
