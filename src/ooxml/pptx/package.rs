/// Package implementation for PowerPoint presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::pptx::parts::PresentationPart;
use crate::ooxml::pptx::presentation::Presentation;
use std::io::{Read, Seek};
use std::path::Path;

/// A PowerPoint (.pptx) package opened for reading.
///
/// Wraps an OPC package whose main part is a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use deckhand::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
/// println!("Presentation has {} slides", pres.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Read a .pptx package from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_opc(OpcPackage::from_bytes(data)?)
    }

    /// Check that the main part is a (possibly macro-enabled) presentation.
    fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        let content_type = main_part.content_type();
        if content_type != ct::PML_PRESENTATION_MAIN && content_type != ct::PML_PRES_MACRO_MAIN {
            return Err(OoxmlError::InvalidContentType {
                expected: format!(
                    "{} or {}",
                    ct::PML_PRESENTATION_MAIN,
                    ct::PML_PRES_MACRO_MAIN
                ),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    /// The main presentation.
    pub fn presentation(&self) -> Result<Presentation<'_>> {
        let main_part = self
            .opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        let pres_part = PresentationPart::from_part(main_part)?;
        Ok(Presentation::new(pres_part, &self.opc))
    }

    /// The underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::{PackURI, XmlPart};
    use crate::ooxml::pptx::{
        Alignment, MutablePresentation, ShapeKind, SlideBackground, TextParagraph,
    };

    #[test]
    fn test_written_deck_reads_back() {
        let mut deck = MutablePresentation::new();
        let slide = deck.add_slide(6).unwrap();
        slide.set_background(SlideBackground::solid(RGBColor::from_u32(0x0D0D12)));
        slide
            .add_text_box(457_200, 914_400, 8_229_600, 640_080)
            .set_text(
                TextParagraph::new("Offerings <Overview>")
                    .size(32)
                    .bold()
                    .color(RGBColor::from_u32(0x6366F1))
                    .align(Alignment::Center),
            );
        let body = deck.add_slide(6).unwrap().add_text_box(0, 0, 10, 10);
        body.set_word_wrap(true)
            .set_text(TextParagraph::new("• first").size(15).space_after(6))
            .add_paragraph(TextParagraph::new("• second").size(15).space_after(6));

        let pkg = Package::from_bytes(deck.to_bytes().unwrap()).unwrap();
        let pres = pkg.presentation().unwrap();
        assert_eq!(pres.slide_count().unwrap(), 2);
        assert_eq!(pres.slide_size().unwrap(), Some((9_144_000, 6_858_000)));

        let slides = pres.slides().unwrap();
        assert_eq!(
            slides[0].background().unwrap(),
            Some(SlideBackground::solid(RGBColor::from_u32(0x0D0D12)))
        );
        assert_eq!(slides[1].background().unwrap(), None);

        let shapes = slides[0].shapes().unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].kind(), ShapeKind::TextBox);
        assert_eq!(shapes[0].name(), "TextBox 1");
        let paras = shapes[0].paragraphs().unwrap();
        assert_eq!(
            paras,
            vec![
                TextParagraph::new("Offerings <Overview>")
                    .size(32)
                    .bold()
                    .color(RGBColor::from_u32(0x6366F1))
                    .align(Alignment::Center)
            ]
        );

        let body = &slides[1].shapes().unwrap()[0];
        assert_eq!(body.text().unwrap().as_deref(), Some("• first\n• second"));
        assert_eq!(body.text_frame().unwrap().word_wrap().unwrap(), Some(true));

        let layout = slides[1].slide_layout().unwrap().unwrap();
        assert_eq!(layout.name().unwrap(), "Blank");

        let names: Vec<String> = pres
            .slide_layouts()
            .unwrap()
            .iter()
            .map(|l| l.name().unwrap())
            .collect();
        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "Title Slide");
        assert_eq!(names[6], "Blank");
        assert_eq!(names[10], "Vertical Title and Text");
    }

    #[test]
    fn test_rejects_non_presentation() {
        let mut opc = OpcPackage::new();
        let uri = PackURI::new("/word/document.xml").unwrap();
        opc.add_part(Box::new(XmlPart::from_string(
            uri.clone(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            "<w:document/>".to_string(),
        )));
        opc.relate_to(&uri, rt::OFFICE_DOCUMENT);

        let err = Package::from_bytes(opc.to_bytes().unwrap()).err().unwrap();
        assert!(matches!(err, OoxmlError::InvalidContentType { .. }));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Package::open(dir.path().join("absent.pptx")).is_err());
    }
}
