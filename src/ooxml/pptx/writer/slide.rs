/// Slides for the presentation writer.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::template::NS_DECLS;
use std::fmt::Write as FmtWrite;

use super::shape::MutableShape;

/// A slide being built.
///
/// Shapes are written in the order they were added, which is also their
/// z-order and reading order.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Value of `p:sldId/@id` in presentation.xml
    pub(crate) slide_id: u32,
    /// Index into the master's layouts
    pub(crate) layout_index: usize,
    pub(crate) background: Option<SlideBackground>,
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32, layout_index: usize) -> Self {
        Self {
            slide_id,
            layout_index,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout_index(&self) -> usize {
        self.layout_index
    }

    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = Some(background);
    }

    pub fn background(&self) -> Option<&SlideBackground> {
        self.background.as_ref()
    }

    /// Add an empty text box and return it for filling.
    ///
    /// Coordinates are EMUs. The group shape holding the tree takes id 1, so
    /// the first text box gets id 2.
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        self.shapes
            .push(MutableShape::new_text_box(shape_id, x, y, width, height));
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes.iter().map(|s| s.shape_id).max().unwrap_or(1) + 1
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate the slide XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 1024);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        write!(xml, "<p:sld {}>", NS_DECLS)?;
        xml.push_str("<p:cSld>");

        // p:bg precedes p:spTree
        if let Some(ref background) = self.background {
            background.write_xml(&mut xml)?;
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256, 6);
        assert_eq!(slide.add_text_box(0, 0, 10, 10).shape_id(), 2);
        assert_eq!(slide.add_text_box(0, 0, 10, 10).shape_id(), 3);
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256, 6);
        slide.set_background(SlideBackground::solid(RGBColor::from_u32(0x6366F1)));
        slide.add_text_box(0, 0, 10, 10);

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="6366F1"/>"#));
        assert!(xml.ends_with("</p:sld>"));
    }
}
