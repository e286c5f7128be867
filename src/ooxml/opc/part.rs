//! Package parts.
//!
//! A part is a named blob with a content type and its own relationships.
//! XML parts additionally hand out quick-xml readers over their content.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;
use memchr::memmem;
use quick_xml::Reader;

/// A part in an OPC package.
pub trait Part: std::fmt::Debug {
    fn partname(&self) -> &PackURI;

    fn content_type(&self) -> &str;

    /// Raw content of the part.
    fn blob(&self) -> &[u8];

    fn rels(&self) -> &Relationships;

    fn rels_mut(&mut self) -> &mut Relationships;

    /// Relate this part to `target`, returning the (possibly existing) rId.
    ///
    /// The target is stored relative to this part's directory.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname().base_uri());
        self.rels_mut().get_or_add(reltype, &target_ref)
    }

    /// Target reference for a relationship ID.
    fn target_ref(&self, r_id: &str) -> Result<&str> {
        self.rels()
            .get(r_id)
            .map(|rel| rel.target_ref())
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("rId: {}", r_id)))
    }

    /// Number of `r:id="<r_id>"` references in the content.
    fn rel_ref_count(&self, r_id: &str) -> usize {
        let pattern = format!(r#"r:id="{}""#, r_id);
        memmem::find_iter(self.blob(), pattern.as_bytes()).count()
    }
}

/// A part with opaque binary content (images, thumbnails, fonts).
#[derive(Debug)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    pub fn new(partname: PackURI, content_type: String, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// A part whose content is UTF-8 XML.
#[derive(Debug)]
pub struct XmlPart {
    partname: PackURI,
    content_type: String,
    xml: Vec<u8>,
    rels: Relationships,
}

impl XmlPart {
    pub fn new(partname: PackURI, content_type: String, xml: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type,
            xml,
            rels,
        }
    }

    /// Build a part from a serialized XML string.
    pub fn from_string(partname: PackURI, content_type: &str, xml: String) -> Self {
        Self::new(partname, content_type.to_string(), xml.into_bytes())
    }

    /// Load an XML part read from a package, validating UTF-8.
    pub fn load(
        partname: PackURI,
        content_type: String,
        xml: Vec<u8>,
        rels: Relationships,
    ) -> Result<Self> {
        std::str::from_utf8(&xml)
            .map_err(|e| OpcError::XmlError(format!("Invalid UTF-8 in {}: {}", partname, e)))?;
        Ok(Self {
            partname,
            content_type,
            xml,
            rels,
        })
    }

    /// A reader over the content. Text is not trimmed, so run text keeps its spaces.
    pub fn reader(&self) -> Reader<&[u8]> {
        Reader::from_reader(self.xml.as_slice())
    }

    pub fn xml_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.xml).map_err(Into::into)
    }

    /// Replace the content. Used when the XML references rIds that only exist
    /// once the part's relationships have been added.
    pub fn set_xml(&mut self, xml: String) {
        self.xml = xml.into_bytes();
    }
}

impl Part for XmlPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.xml
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// Chooses the part type for content read from a package.
pub struct PartFactory;

impl PartFactory {
    pub fn load(
        partname: PackURI,
        content_type: String,
        blob: Vec<u8>,
        rels: Relationships,
    ) -> Result<Box<dyn Part>> {
        if Self::is_xml_content_type(&content_type) {
            Ok(Box::new(XmlPart::load(partname, content_type, blob, rels)?))
        } else {
            let mut part = BlobPart::new(partname, content_type, blob);
            part.rels = rels;
            Ok(Box::new(part))
        }
    }

    #[inline]
    fn is_xml_content_type(content_type: &str) -> bool {
        content_type.ends_with("+xml") || content_type.ends_with("/xml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_relate_to_uses_relative_target() {
        let mut slide = XmlPart::from_string(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
            String::from("<p:sld/>"),
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout7.xml").unwrap();

        let r_id = slide.relate_to(&layout, rt::SLIDE_LAYOUT);
        assert_eq!(r_id, "rId1");
        assert_eq!(slide.relate_to(&layout, rt::SLIDE_LAYOUT), "rId1");
        assert_eq!(
            slide.target_ref(&r_id).unwrap(),
            "../slideLayouts/slideLayout7.xml"
        );
        assert!(slide.target_ref("rId4").is_err());
    }

    #[test]
    fn test_rel_ref_count() {
        let part = XmlPart::from_string(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            String::from(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#),
        );
        assert_eq!(part.rel_ref_count("rId2"), 1);
        assert_eq!(part.rel_ref_count("rId9"), 0);
    }

    #[test]
    fn test_factory_picks_part_type() {
        let uri = PackURI::new("/ppt/media/image1.png").unwrap();
        let part = PartFactory::load(
            uri,
            ct::PNG.to_string(),
            vec![0x89, 0x50],
            Relationships::default(),
        )
        .unwrap();
        assert_eq!(part.blob(), &[0x89, 0x50]);

        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let bad = PartFactory::load(
            uri,
            ct::PML_SLIDE.to_string(),
            vec![0xFF, 0xFE],
            Relationships::default(),
        );
        assert!(bad.is_err());
    }
}
