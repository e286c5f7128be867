/// Presentation writer for PPTX.
use crate::common::unit::inches;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::part::{Part, XmlPart};
use crate::ooxml::opc::{OpcPackage, PackURI};
use crate::ooxml::pptx::template::{self, NS_DECLS, SLIDE_LAYOUTS};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

/// `p:sldId/@id` of the first slide; ids below 256 are reserved.
const FIRST_SLIDE_ID: u32 = 256;
const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// A PowerPoint presentation being written.
///
/// Holds the slides and the slide size; the master, layouts and theme come
/// from [`template`] when the package is assembled.
///
/// # Examples
///
/// ```rust,no_run
/// use deckhand::common::unit::inches;
/// use deckhand::ooxml::pptx::{MutablePresentation, TextParagraph};
///
/// let mut pres = MutablePresentation::new();
/// let slide = pres.add_slide(6)?;
/// slide
///     .add_text_box(inches(0.5), inches(2.0), inches(9.0), inches(1.2))
///     .set_text(TextParagraph::new("Hello").size(36).bold());
/// pres.save("hello.pptx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    title: String,
}

impl MutablePresentation {
    /// Create an empty presentation, 10" x 7.5" (4:3).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches(10.0),
            slide_height: inches(7.5),
            title: String::from("PowerPoint Presentation"),
        }
    }

    /// Append a slide based on layout `layout_index` of the master.
    pub fn add_slide(&mut self, layout_index: usize) -> Result<&mut MutableSlide> {
        if layout_index >= SLIDE_LAYOUTS.len() {
            return Err(OoxmlError::InvalidFormat(format!(
                "slide layout index {} out of range (0..{})",
                layout_index,
                SLIDE_LAYOUTS.len()
            )));
        }
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(slide_id, layout_index));
        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Title recorded in the core properties.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Write the presentation to `path`. The parent directory must exist.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_package()?.save(path.as_ref())?;
        log::debug!(
            "saved {} slides to {}",
            self.slides.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_package()?.to_bytes()?)
    }

    /// Assemble the OPC package: template parts first, then one part per slide.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml")?;

        // Layouts point back at the master
        let mut layout_uris = Vec::with_capacity(SLIDE_LAYOUTS.len());
        for i in 0..SLIDE_LAYOUTS.len() {
            let uri = PackURI::new(format!("/ppt/slideLayouts/slideLayout{}.xml", i + 1))?;
            let mut layout = XmlPart::from_string(
                uri.clone(),
                ct::PML_SLIDE_LAYOUT,
                template::slide_layout_xml(i)?,
            );
            layout.relate_to(&master_uri, rt::SLIDE_MASTER);
            package.add_part(Box::new(layout));
            layout_uris.push(uri);
        }

        let mut master = XmlPart::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER.to_string(),
            Vec::new(),
        );
        let layout_rids: Vec<String> = layout_uris
            .iter()
            .map(|uri| master.relate_to(uri, rt::SLIDE_LAYOUT))
            .collect();
        master.relate_to(&theme_uri, rt::THEME);
        master.set_xml(template::slide_master_xml(&layout_rids)?);
        package.add_part(Box::new(master));

        package.add_part(Box::new(XmlPart::from_string(
            theme_uri.clone(),
            ct::OFC_THEME,
            template::theme_xml().to_string(),
        )));

        let mut pres = XmlPart::new(
            pres_uri.clone(),
            ct::PML_PRESENTATION_MAIN.to_string(),
            Vec::new(),
        );
        let master_rid = pres.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut slide_rids = Vec::with_capacity(self.slides.len());
        for (i, slide) in self.slides.iter().enumerate() {
            let uri = PackURI::new(format!("/ppt/slides/slide{}.xml", i + 1))?;
            let mut part = XmlPart::from_string(uri.clone(), ct::PML_SLIDE, slide.to_xml()?);
            part.relate_to(&layout_uris[slide.layout_index], rt::SLIDE_LAYOUT);
            package.add_part(Box::new(part));
            slide_rids.push(pres.relate_to(&uri, rt::SLIDE));
        }

        for (partname, content_type, reltype, xml) in [
            ("/ppt/presProps.xml", ct::PML_PRES_PROPS, rt::PRES_PROPS, template::pres_props_xml()),
            ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, rt::VIEW_PROPS, template::view_props_xml()),
            (
                "/ppt/tableStyles.xml",
                ct::PML_TABLE_STYLES,
                rt::TABLE_STYLES,
                template::table_styles_xml(),
            ),
        ] {
            let uri = PackURI::new(partname)?;
            pres.relate_to(&uri, reltype);
            package.add_part(Box::new(XmlPart::from_string(uri, content_type, xml)));
        }
        pres.relate_to(&theme_uri, rt::THEME);

        pres.set_xml(self.presentation_xml(&master_rid, &slide_rids)?);
        package.add_part(Box::new(pres));
        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);

        let core_uri = PackURI::new("/docProps/core.xml")?;
        package.add_part(Box::new(XmlPart::from_string(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(&self.title),
        )));
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);

        let app_uri = PackURI::new("/docProps/app.xml")?;
        package.add_part(Box::new(XmlPart::from_string(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len()),
        )));
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        log::debug!("assembled package with {} parts", package.part_count());
        Ok(package)
    }

    /// Generate presentation.xml given the relationship IDs of the master and
    /// of each slide, in slide order.
    pub(crate) fn presentation_xml(
        &self,
        master_rid: &str,
        slide_rids: &[String],
    ) -> Result<String> {
        if slide_rids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "{} slide relationship IDs for {} slides",
                slide_rids.len(),
                self.slides.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        write!(xml, r#"<p:presentation {} saveSubsetFonts="1">"#, NS_DECLS)?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rid
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rid) in self.slides.iter().zip(slide_rids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), rid)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
