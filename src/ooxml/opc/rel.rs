//! Relationships between parts of an OPC package.
//!
//! Every part (and the package itself) owns one [`Relationships`] collection,
//! serialized to the matching `_rels/*.rels` member.

use crate::common::xml::escape_xml_into;
use crate::ooxml::opc::constants::{namespace, target_mode};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target_ref: String,
    is_external: bool,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String, is_external: bool) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Target as written in the `.rels` file: relative for internal targets, a URL otherwise.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }
}

/// Ordered relationships from one source part.
///
/// Source parts in a presentation rarely carry more than a handful of
/// relationships (a slide has one, to its layout), so they live inline.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Directory of the source part, used to resolve relative targets
    base_uri: String,
    rels: SmallVec<[Relationship; 4]>,
}

impl Relationships {
    pub fn new<S: Into<String>>(base_uri: S) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: SmallVec::new(),
        }
    }

    #[inline]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Append a relationship with an explicit rId.
    pub fn add(&mut self, r_id: &str, reltype: &str, target_ref: &str, is_external: bool) {
        self.rels.push(Relationship::new(
            r_id.to_string(),
            reltype.to_string(),
            target_ref.to_string(),
            is_external,
        ));
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Return the rId of an internal relationship of `reltype` to `target_ref`,
    /// adding one with the next free rId if none exists.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| !rel.is_external && rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.add(&r_id, reltype, target_ref, false);
        r_id
    }

    /// Lowest `rIdN` not yet in use, starting from `rId1`.
    pub fn next_r_id(&self) -> String {
        let mut used: SmallVec<[u32; 8]> = self
            .rels
            .iter()
            .filter_map(|rel| rel.r_id.strip_prefix("rId"))
            .filter_map(|n| atoi_simd::parse_pos::<u32, false>(n.as_bytes()).ok())
            .collect();
        used.sort_unstable();

        let mut next = 1u32;
        for n in used {
            if n == next {
                next += 1;
            } else if n > next {
                break;
            }
        }
        format!("rId{}", next)
    }

    /// Absolute partname of the internal target of `r_id`.
    pub fn target_partname(&self, r_id: &str) -> Result<PackURI> {
        let rel = self
            .get(r_id)
            .ok_or_else(|| OpcError::RelationshipNotFound(r_id.to_string()))?;
        if rel.is_external {
            return Err(OpcError::InvalidRelationship(format!(
                "{} targets an external resource",
                r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &rel.target_ref)
    }

    /// The first relationship of `reltype`, in document order.
    pub fn first_of_type(&self, reltype: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.reltype == reltype)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Parse a `.rels` document for a source part living under `base_uri`.
    pub fn from_xml(base_uri: &str, xml: &[u8]) -> Result<Self> {
        let mut rels = Self::new(base_uri);
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target = None;
                    let mut external = false;

                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = attr.unescape_value()?;
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value.into_owned()),
                            b"Type" => reltype = Some(value.into_owned()),
                            b"Target" => target = Some(value.into_owned()),
                            b"TargetMode" => external = value == target_mode::EXTERNAL,
                            _ => {},
                        }
                    }

                    match (r_id, reltype, target) {
                        (Some(id), Some(rt), Some(tr)) => {
                            rels.rels.push(Relationship::new(id, rt, tr, external))
                        },
                        _ => {
                            return Err(OpcError::InvalidRelationship(
                                "Relationship element missing Id, Type or Target".to_string(),
                            ));
                        },
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OpcError::XmlError(format!("Rels parse error: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Serialize to a `.rels` document, in insertion order.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        xml.push_str("<Relationships xmlns=\"");
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str("\">");

        for rel in &self.rels {
            xml.push_str("<Relationship Id=\"");
            escape_xml_into(&mut xml, &rel.r_id);
            xml.push_str("\" Type=\"");
            escape_xml_into(&mut xml, &rel.reltype);
            xml.push_str("\" Target=\"");
            escape_xml_into(&mut xml, &rel.target_ref);
            if rel.is_external {
                xml.push_str("\" TargetMode=\"External");
            }
            xml.push_str("\"/>");
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/")
    }
}
