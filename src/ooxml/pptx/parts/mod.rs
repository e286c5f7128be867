/// Parts for PowerPoint presentation documents.
///
/// Thin borrowed wrappers over OPC parts that know how to read one kind of
/// PresentationML XML.
pub mod presentation;
pub mod slide;

pub use presentation::PresentationPart;
pub use slide::{SlideLayoutPart, SlideMasterPart, SlidePart};

use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// The `r:id` values of every `element` in document order.
///
/// Matches the prefixed `id` attribute, so the element's own numeric `id`
/// is skipped.
pub(crate) fn collect_rids(xml: &[u8], element: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut rids = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == element {
                    for attr in e.attributes() {
                        let attr = attr?;
                        if attr.key.prefix().is_some() && attr.key.local_name().as_ref() == b"id" {
                            rids.push(attr.unescape_value()?.into_owned());
                            break;
                        }
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok(rids)
}

/// `p:cSld/@name`, or an empty string when unnamed.
pub(crate) fn common_slide_data_name(xml: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"cSld" {
                    for attr in e.attributes() {
                        let attr = attr?;
                        if attr.key.as_ref() == b"name" {
                            return Ok(attr.unescape_value()?.into_owned());
                        }
                    }
                    return Ok(String::new());
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_rids_skips_numeric_id() {
        let xml = br#"<p:sldLayoutIdLst xmlns:p="p" xmlns:r="r"><p:sldLayoutId id="2147483649" r:id="rId1"/><p:sldLayoutId r:id="R5a" id="2147483650"/></p:sldLayoutIdLst>"#;
        assert_eq!(collect_rids(xml, b"sldLayoutId").unwrap(), vec!["rId1", "R5a"]);
    }

    #[test]
    fn test_common_slide_data_name() {
        assert_eq!(
            common_slide_data_name(br#"<p:sldLayout><p:cSld name="Two &amp; More"/></p:sldLayout>"#).unwrap(),
            "Two & More"
        );
        assert_eq!(common_slide_data_name(b"<p:sld><p:cSld/></p:sld>").unwrap(), "");
    }
}
