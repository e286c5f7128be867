/// Slide, slide layout and slide master parts.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::parts::{collect_rids, common_slide_data_name};
use crate::ooxml::pptx::shapes::base::BaseShape;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A slide part (`/ppt/slides/slideN.xml`).
pub struct SlidePart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlidePart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    #[inline]
    fn xml_bytes(&self) -> &'a [u8] {
        self.part.blob()
    }

    /// The slide's name from `p:cSld/@name`; usually empty.
    pub fn name(&self) -> Result<String> {
        common_slide_data_name(self.xml_bytes())
    }

    /// Top-level shapes of the shape tree in document order.
    ///
    /// Group members stay inside their group shape.
    pub fn shapes(&self) -> Result<Vec<BaseShape>> {
        extract_shapes(self.xml_bytes())
    }

    pub fn background(&self) -> Result<Option<SlideBackground>> {
        SlideBackground::from_xml(self.xml_bytes())
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

/// Walk `p:spTree` and cut out each direct child element that is a shape.
fn extract_shapes(xml: &[u8]) -> Result<Vec<BaseShape>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut shapes = Vec::new();
    let mut in_tree = false;

    loop {
        let start = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if !in_tree {
                    in_tree = e.local_name().as_ref() == b"spTree";
                    continue;
                }
                // Skip to the matching end tag; nested shapes travel with their parent
                let element = BaseShape::element_name(e.local_name().as_ref());
                reader
                    .read_to_end(e.name())
                    .map_err(|err| OoxmlError::Xml(err.to_string()))?;
                if let Some(element) = element {
                    let end = reader.buffer_position() as usize;
                    shapes.push(BaseShape::from_xml(element, xml[start..end].to_vec())?);
                }
            },
            Ok(Event::Empty(e)) if in_tree => {
                if let Some(element) = BaseShape::element_name(e.local_name().as_ref()) {
                    let end = reader.buffer_position() as usize;
                    shapes.push(BaseShape::from_xml(element, xml[start..end].to_vec())?);
                }
            },
            // Children are consumed whole, so the next end tag closes the tree
            Ok(Event::End(_)) if in_tree => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(shapes)
}

/// A slide layout part (`/ppt/slideLayouts/slideLayoutN.xml`).
pub struct SlideLayoutPart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlideLayoutPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// Layout name, e.g. "Title Slide" or "Blank".
    pub fn name(&self) -> Result<String> {
        common_slide_data_name(self.part.blob())
    }

    pub fn background(&self) -> Result<Option<SlideBackground>> {
        SlideBackground::from_xml(self.part.blob())
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

/// A slide master part (`/ppt/slideMasters/slideMasterN.xml`).
pub struct SlideMasterPart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlideMasterPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    pub fn name(&self) -> Result<String> {
        common_slide_data_name(self.part.blob())
    }

    /// Relationship IDs from `p:sldLayoutIdLst`, in list order.
    pub fn slide_layout_rids(&self) -> Result<Vec<String>> {
        collect_rids(self.part.blob(), b"sldLayoutId")
    }

    pub fn background(&self) -> Result<Option<SlideBackground>> {
        SlideBackground::from_xml(self.part.blob())
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::shapes::ShapeKind;

    const SLIDE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="a" xmlns:p="p" xmlns:r="r">
  <p:cSld name="Intro">
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
      <p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/>
        <p:txBody><a:bodyPr/><a:p><a:r><a:t>Hello</a:t></a:r></a:p></p:txBody></p:sp>
      <p:grpSp><p:nvGrpSpPr><p:cNvPr id="3" name="Group 2"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>
        <p:sp><p:nvSpPr><p:cNvPr id="4" name="Inner"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr/></p:sp>
      </p:grpSp>
      <p:cxnSp><p:nvCxnSpPr><p:cNvPr id="5" name="Connector 4"/><p:cNvCxnSpPr/><p:nvPr/></p:nvCxnSpPr><p:spPr/></p:cxnSp>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#;

    #[test]
    fn test_slide_shapes() {
        let part = crate::ooxml::opc::XmlPart::from_string(
            crate::ooxml::opc::PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            crate::ooxml::opc::constants::content_type::PML_SLIDE,
            SLIDE.to_string(),
        );
        let slide = SlidePart::from_part(&part).unwrap();
        assert_eq!(slide.name().unwrap(), "Intro");
        assert_eq!(slide.background().unwrap(), None);

        let shapes = slide.shapes().unwrap();
        let kinds: Vec<ShapeKind> = shapes.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Placeholder, ShapeKind::Group, ShapeKind::Line]
        );
        assert_eq!(shapes[0].text().unwrap().as_deref(), Some("Hello"));
        assert_eq!(shapes[1].name(), "Group 2");
    }
}
