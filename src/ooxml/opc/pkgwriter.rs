//! Serializes an [`OpcPackage`] into a ZIP archive.
//!
//! Member order: `[Content_Types].xml`, `_rels/.rels`, then each part
//! followed by its `.rels` member when it has relationships.

use crate::common::xml::escape_xml_into;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use std::collections::BTreeMap;
use std::path::Path;

pub struct PackageWriter;

impl PackageWriter {
    /// Write `package` to `path`, creating or truncating the file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path.as_ref(), bytes)?;
        log::debug!("saved package to {}", path.as_ref().display());
        Ok(())
    }

    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys = PhysPkgWriter::new();

        let cti = ContentTypesItem::from_package(package);
        phys.write(&PackURI::new(CONTENT_TYPES_URI)?, cti.to_xml().as_bytes())?;
        phys.write(&PackURI::package().rels_uri()?, package.rels().to_xml().as_bytes())?;

        for part in package.iter_parts() {
            phys.write(part.partname(), part.blob())?;
            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                phys.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        phys.finish()
    }
}

/// Builder for `[Content_Types].xml`.
///
/// Well-known extension/content-type pairs become `Default` entries; every
/// other part gets an `Override`.
struct ContentTypesItem {
    defaults: BTreeMap<String, &'static str>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS);
        defaults.insert("xml".to_string(), ct::XML);
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add(part.partname(), part.content_type());
        }
        cti
    }

    fn add(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext().to_lowercase();
        match Self::default_for(&ext, content_type) {
            Some(default) => {
                self.defaults.insert(ext, default);
            },
            None => {
                self.overrides
                    .insert(partname.to_string(), content_type.to_string());
            },
        }
    }

    fn default_for(ext: &str, content_type: &str) -> Option<&'static str> {
        [
            ("rels", ct::OPC_RELATIONSHIPS),
            ("xml", ct::XML),
            ("png", ct::PNG),
            ("jpg", ct::JPEG),
            ("jpeg", ct::JPEG),
            ("gif", ct::GIF),
        ]
        .into_iter()
        .find(|&(e, c)| e == ext && c == content_type)
        .map(|(_, c)| c)
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        xml.push_str("<Types xmlns=\"");
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str("\">");

        for (ext, content_type) in &self.defaults {
            xml.push_str("<Default Extension=\"");
            escape_xml_into(&mut xml, ext);
            xml.push_str("\" ContentType=\"");
            escape_xml_into(&mut xml, content_type);
            xml.push_str("\"/>");
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str("<Override PartName=\"");
            escape_xml_into(&mut xml, partname);
            xml.push_str("\" ContentType=\"");
            escape_xml_into(&mut xml, content_type);
            xml.push_str("\"/>");
        }

        xml.push_str("</Types>");
        xml
    }
}
