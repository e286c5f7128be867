/// Presentation part - the main part in a .pptx package.
///
/// Corresponds to `/ppt/presentation.xml` in the package.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use crate::ooxml::pptx::parts::collect_rids;
use quick_xml::Reader;
use quick_xml::events::Event;

/// The main presentation part.
///
/// Holds the slide size and the ordered lists of slides and slide masters,
/// each entry naming its target by relationship ID.
///
/// # Example
///
/// ```rust,ignore
/// let pres_part = PresentationPart::from_part(opc_part)?;
/// let slide_count = pres_part.slide_count()?;
/// ```
pub struct PresentationPart<'a> {
    /// The underlying OPC part
    part: &'a dyn Part,
}

impl<'a> PresentationPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    #[inline]
    fn xml_bytes(&self) -> &[u8] {
        self.part.blob()
    }

    /// Number of `<p:sldId>` entries.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_rids()?.len())
    }

    /// Slide width in EMUs, or `None` when `p:sldSz` is absent.
    pub fn slide_width(&self) -> Result<Option<i64>> {
        Ok(self.slide_size()?.map(|(cx, _)| cx))
    }

    /// Slide height in EMUs, or `None` when `p:sldSz` is absent.
    pub fn slide_height(&self) -> Result<Option<i64>> {
        Ok(self.slide_size()?.map(|(_, cy)| cy))
    }

    /// `(cx, cy)` of `p:sldSz`.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"sldSz" {
                        let mut cx = None;
                        let mut cy = None;
                        for attr in e.attributes() {
                            let attr = attr?;
                            let slot = match attr.key.as_ref() {
                                b"cx" => &mut cx,
                                b"cy" => &mut cy,
                                _ => continue,
                            };
                            let value = std::str::from_utf8(&attr.value)?;
                            *slot = Some(value.parse::<i64>().map_err(|e| {
                                OoxmlError::Xml(format!("Invalid slide size {:?}: {}", value, e))
                            })?);
                        }
                        return match (cx, cy) {
                            (Some(cx), Some(cy)) => Ok(Some((cx, cy))),
                            _ => Err(OoxmlError::Xml(
                                "p:sldSz is missing cx or cy".to_string(),
                            )),
                        };
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }

    /// Relationship IDs of all slides in presentation order.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        collect_rids(self.xml_bytes(), b"sldId")
    }

    /// Relationship IDs of the slide masters in order.
    pub fn slide_master_rids(&self) -> Result<Vec<String>> {
        collect_rids(self.xml_bytes(), b"sldMasterId")
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;
    use crate::ooxml::opc::{PackURI, XmlPart};

    fn part(xml: &str) -> XmlPart {
        XmlPart::from_string(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            xml.to_string(),
        )
    }

    #[test]
    fn test_presentation_part() {
        let xml = part(
            r#"<p:presentation xmlns:p="p" xmlns:r="r">
                <p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
                <p:sldIdLst><p:sldId id="256" r:id="rId7"/><p:sldId id="257" r:id="rId3"/></p:sldIdLst>
                <p:sldSz cx="9144000" cy="6858000"/><p:notesSz cx="6858000" cy="9144000"/>
            </p:presentation>"#,
        );
        let pres = PresentationPart::from_part(&xml).unwrap();
        assert_eq!(pres.slide_count().unwrap(), 2);
        assert_eq!(pres.slide_rids().unwrap(), vec!["rId7", "rId3"]);
        assert_eq!(pres.slide_master_rids().unwrap(), vec!["rId1"]);
        assert_eq!(pres.slide_width().unwrap(), Some(9_144_000));
        assert_eq!(pres.slide_height().unwrap(), Some(6_858_000));
    }

    #[test]
    fn test_missing_slide_size() {
        let xml = part(r#"<p:presentation xmlns:p="p"/>"#);
        let pres = PresentationPart::from_part(&xml).unwrap();
        assert_eq!(pres.slide_size().unwrap(), None);
        assert_eq!(pres.slide_count().unwrap(), 0);
    }
}
