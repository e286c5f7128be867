//! Low-level, read-only view of a serialized OPC package.
//!
//! Resolves content types and walks the relationship graph from the package
//! root, yielding every reachable part together with its relationships.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::{HashMap, HashSet};

/// A part as read from the physical package, before it becomes a `Part`.
#[derive(Debug)]
pub struct SerializedPart {
    pub partname: PackURI,
    pub content_type: String,
    /// Type of the relationship through which the part was first reached
    pub reltype: String,
    pub blob: Vec<u8>,
    pub rels: Relationships,
}

/// Content type lookup built from `[Content_Types].xml`.
///
/// Overrides are keyed by lower-cased partname and defaults by lower-cased
/// extension; partname comparison in OPC is case-insensitive.
#[derive(Debug, Default)]
pub(crate) struct ContentTypeMap {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    pub(crate) fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let is_default = match e.local_name().as_ref() {
                        b"Default" => true,
                        b"Override" => false,
                        _ => {
                            buf.clear();
                            continue;
                        },
                    };

                    let mut key = None;
                    let mut content_type = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => {
                                key = Some(attr.unescape_value()?.to_lowercase())
                            },
                            b"ContentType" => {
                                content_type = Some(attr.unescape_value()?.into_owned())
                            },
                            _ => {},
                        }
                    }

                    if let (Some(key), Some(ct)) = (key, content_type) {
                        if is_default {
                            map.defaults.insert(key, ct);
                        } else {
                            map.overrides.insert(key, ct);
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!(
                        "Content types parse error: {}",
                        e
                    )));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Override first, then the default for the extension.
    pub(crate) fn get(&self, pack_uri: &PackURI) -> Result<&str> {
        self.overrides
            .get(&pack_uri.as_str().to_lowercase())
            .or_else(|| self.defaults.get(&pack_uri.ext().to_lowercase()))
            .map(String::as_str)
            .ok_or_else(|| OpcError::ContentTypeNotFound(pack_uri.to_string()))
    }
}

/// The parsed package: package-level relationships plus every reachable part.
pub struct PackageReader {
    pkg_rels: Relationships,
    sparts: Vec<SerializedPart>,
}

impl PackageReader {
    pub fn from_phys_reader(mut phys: PhysPkgReader) -> Result<Self> {
        let content_types = ContentTypeMap::from_xml(phys.content_types_xml()?)?;
        let package_uri = PackURI::package();
        let pkg_rels = Self::load_rels(&phys, &package_uri)?;

        let mut sparts = Vec::with_capacity(phys.len());
        let mut visited: HashSet<PackURI> = HashSet::new();
        let mut queue: Vec<(PackURI, String)> = Vec::new();
        Self::enqueue_targets(&pkg_rels, &mut visited, &mut queue)?;

        // Depth-first over internal targets; each part is loaded once.
        while let Some((partname, reltype)) = queue.pop() {
            let rels = Self::load_rels(&phys, &partname)?;
            Self::enqueue_targets(&rels, &mut visited, &mut queue)?;

            let content_type = content_types.get(&partname)?.to_string();
            let blob = phys.take_blob(&partname)?;
            sparts.push(SerializedPart {
                partname,
                content_type,
                reltype,
                blob,
                rels,
            });
        }

        log::debug!("loaded {} parts", sparts.len());
        Ok(Self { pkg_rels, sparts })
    }

    fn load_rels(phys: &PhysPkgReader, source: &PackURI) -> Result<Relationships> {
        match phys.rels_xml_for(source)? {
            Some(xml) => Relationships::from_xml(source.base_uri(), xml),
            None => Ok(Relationships::new(source.base_uri())),
        }
    }

    fn enqueue_targets(
        rels: &Relationships,
        visited: &mut HashSet<PackURI>,
        queue: &mut Vec<(PackURI, String)>,
    ) -> Result<()> {
        for rel in rels.iter().filter(|rel| !rel.is_external()) {
            let target = PackURI::from_rel_ref(rels.base_uri(), rel.target_ref())?;
            if visited.insert(target.clone()) {
                queue.push((target, rel.reltype().to_string()));
            }
        }
        Ok(())
    }

    pub fn pkg_rels(&self) -> &Relationships {
        &self.pkg_rels
    }

    pub fn iter_sparts(&self) -> impl Iterator<Item = &SerializedPart> {
        self.sparts.iter()
    }

    /// Move the parsed parts and package relationships out.
    pub fn into_parts(self) -> (Relationships, Vec<SerializedPart>) {
        (self.pkg_rels, self.sparts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    #[test]
    fn test_content_type_map() {
        let xml = br#"<?xml version="1.0"?>
            <Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
                <Default Extension="XML" ContentType="application/xml"/>
                <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
                <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
            </Types>"#;

        let map = ContentTypeMap::from_xml(xml).unwrap();

        let uri = PackURI::new("/docProps/custom.xml").unwrap();
        assert_eq!(map.get(&uri).unwrap(), ct::XML);

        let uri = PackURI::new("/PPT/Presentation.xml").unwrap();
        assert_eq!(map.get(&uri).unwrap(), ct::PML_PRESENTATION_MAIN);

        let uri = PackURI::new("/ppt/media/image1.png").unwrap();
        assert!(matches!(map.get(&uri), Err(OpcError::ContentTypeNotFound(_))));
    }
}
