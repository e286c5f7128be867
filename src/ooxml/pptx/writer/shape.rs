/// Text box shapes for the slide writer.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml_into;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::TextParagraph;
use crate::ooxml::pptx::shapes::textframe::LINE_BREAK;
use std::fmt::Write as FmtWrite;

/// A text box on a slide (`p:sp` with `txBox="1"`).
///
/// A new text box holds one empty paragraph, the frame's initial paragraph.
/// Replace it with [`set_text`](Self::set_text) and append the rest with
/// [`add_paragraph`](Self::add_paragraph). A `\n` or `\v` inside a
/// paragraph's text is written as a soft line break (`a:br`).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    name: String,
    /// Position and size in EMUs
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    word_wrap: bool,
    paragraphs: Vec<TextParagraph>,
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            name: format!("TextBox {}", shape_id - 1),
            x,
            y,
            width,
            height,
            word_wrap: false,
            paragraphs: vec![TextParagraph::default()],
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(left, top, width, height)` in EMUs.
    pub fn geometry(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Wrap lines at the box edge (`wrap="square"`) instead of growing the box.
    pub fn set_word_wrap(&mut self, word_wrap: bool) -> &mut Self {
        self.word_wrap = word_wrap;
        self
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    /// Replace the initial paragraph.
    pub fn set_text(&mut self, paragraph: TextParagraph) -> &mut Self {
        self.paragraphs[0] = paragraph;
        self
    }

    /// Append a paragraph after the existing ones.
    pub fn add_paragraph(&mut self, paragraph: TextParagraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn paragraphs(&self) -> &[TextParagraph] {
        &self.paragraphs
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp><p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{}" name=""#, self.shape_id)?;
        escape_xml_into(xml, &self.name);
        xml.push_str(r#""/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

        xml.push_str("<p:spPr><a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str(r#"</a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("<a:noFill/></p:spPr>");

        xml.push_str("<p:txBody>");
        write!(
            xml,
            r#"<a:bodyPr wrap="{}" rtlCol="0"><a:spAutoFit/></a:bodyPr><a:lstStyle/>"#,
            if self.word_wrap { "square" } else { "none" }
        )?;
        for para in &self.paragraphs {
            write_paragraph(xml, para)?;
        }
        xml.push_str("</p:txBody></p:sp>");
        Ok(())
    }
}

fn write_paragraph(xml: &mut String, para: &TextParagraph) -> Result<()> {
    xml.push_str("<a:p>");

    if para.alignment.is_some() || para.space_after_pt.is_some() {
        xml.push_str("<a:pPr");
        if let Some(align) = para.alignment {
            write!(xml, r#" algn="{}""#, align.as_attr())?;
        }
        xml.push('>');
        if let Some(pt) = para.space_after_pt {
            write!(
                xml,
                r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                pt_to_centipoints(pt)
            )?;
        }
        xml.push_str("</a:pPr>");
    }

    // Line breaks inside a paragraph become <a:br/> between runs
    for (i, line) in para.text.split(['\n', LINE_BREAK]).enumerate() {
        if i > 0 {
            xml.push_str("<a:br>");
            write_run_props(xml, para, "a:rPr")?;
            xml.push_str("</a:br>");
        }
        if line.is_empty() {
            continue;
        }
        xml.push_str("<a:r>");
        write_run_props(xml, para, "a:rPr")?;
        xml.push_str("<a:t>");
        escape_xml_into(xml, line);
        xml.push_str("</a:t></a:r>");
    }

    write_run_props(xml, para, "a:endParaRPr")?;
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_props(xml: &mut String, para: &TextParagraph, tag: &str) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;
    if let Some(size) = para.size_pt {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if para.bold {
        xml.push_str(r#" b="1""#);
    }
    if para.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0""#);

    match para.color {
        Some(color) => write!(
            xml,
            r#"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></{}>"#,
            color.to_hex(),
            tag
        )?,
        None => xml.push_str("/>"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::common::unit::inches;
    use crate::ooxml::pptx::format::Alignment;

    #[test]
    fn test_new_text_box() {
        let shape =
            MutableShape::new_text_box(2, inches(0.5), inches(2.0), inches(9.0), inches(1.2));
        assert_eq!(shape.name(), "TextBox 1");
        assert_eq!(shape.paragraphs().len(), 1);
        assert_eq!(shape.paragraphs()[0].text, "");
        assert!(!shape.word_wrap());
        assert_eq!(shape.geometry(), (457_200, 1_828_800, 8_229_600, 1_097_280));
    }

    #[test]
    fn test_text_box_xml() {
        let mut shape = MutableShape::new_text_box(3, 0, 0, 100, 100);
        shape.set_word_wrap(true).set_text(
            TextParagraph::new("Tom & Jerry")
                .size(32)
                .bold()
                .color(RGBColor::from_u32(0x6366F1))
                .align(Alignment::Center),
        );
        shape.add_paragraph(TextParagraph::new("• second").space_after(6));

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 2"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square""#));
        assert!(xml.contains(r#"<a:pPr algn="ctr">"#));
        assert!(xml.contains(
            r#"<a:rPr lang="en-US" sz="3200" b="1" dirty="0"><a:solidFill><a:srgbClr val="6366F1"/>"#
        ));
        assert!(xml.contains("<a:t>Tom &amp; Jerry</a:t>"));
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="600"/></a:spcAft>"#));
        assert_eq!(xml.matches("<a:p>").count(), 2);
    }

    #[test]
    fn test_empty_paragraph_has_no_run() {
        let shape = MutableShape::new_text_box(2, 0, 0, 1, 1);
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(!xml.contains("<a:r>"));
        assert!(xml.contains(r#"<a:bodyPr wrap="none""#));
        assert!(xml.contains(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#));
    }

    #[test]
    fn test_soft_breaks_and_control_chars() {
        let mut shape = MutableShape::new_text_box(2, 0, 0, 1, 1);
        shape.set_text(TextParagraph::new("Bell\u{7}Title\u{b}next\nlast"));
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.contains("<a:t>Bell_x0007_Title</a:t>"));
        assert!(xml.contains("<a:t>next</a:t>"));
        assert!(xml.contains("<a:t>last</a:t>"));
        assert_eq!(xml.matches("<a:br>").count(), 2);
        assert!(!xml.contains('\u{7}'));
        assert!(!xml.contains('\u{b}'));
    }
}
