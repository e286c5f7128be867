//! Slide backgrounds (`p:cSld/p:bg`).
//!
//! The writer only produces solid sRGB fills. The reader recognises the
//! other fill kinds so callers can tell them apart, but only decodes colours.

use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fmt::Write as _;

/// Background fill of a single slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBackground {
    /// `a:solidFill` with an explicit `a:srgbClr`
    Solid { color: RGBColor },
    /// `a:solidFill` with an `a:schemeClr`; holds the scheme slot name (`bg1`, `accent1`, ...)
    Scheme { name: String },
    Gradient,
    Picture,
    Pattern,
    /// `p:bgRef` into the theme's background fill styles
    ThemeReference { idx: u32 },
}

impl SlideBackground {
    pub fn solid(color: RGBColor) -> Self {
        Self::Solid { color }
    }

    /// The explicit colour, when the background is a solid sRGB fill.
    pub fn color(&self) -> Option<RGBColor> {
        match self {
            Self::Solid { color } => Some(*color),
            _ => None,
        }
    }

    /// Append the `<p:bg>` element to `xml`.
    ///
    /// Only solid fills are written; any other variant is an error.
    pub fn write_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            Self::Solid { color } => {
                write!(
                    xml,
                    r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                    color.to_hex()
                )?;
            },
            Self::Scheme { name } => {
                xml.push_str("<p:bg><p:bgPr><a:solidFill><a:schemeClr val=\"");
                crate::common::xml::escape_xml_into(xml, name);
                xml.push_str("\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>");
            },
            other => {
                return Err(OoxmlError::InvalidFormat(format!(
                    "cannot write background {:?}",
                    other
                )));
            },
        }
        Ok(())
    }

    /// Parse the background of a slide, layout, or master.
    ///
    /// Returns `None` when the element has no `p:bg`, i.e. the background is
    /// inherited.
    pub fn from_xml(xml: &[u8]) -> Result<Option<Self>> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        let mut in_bg = false;
        let mut in_solid = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    let name = e.local_name();
                    match name.as_ref() {
                        b"bg" => in_bg = true,
                        b"spTree" => break,
                        _ if !in_bg => {},
                        b"solidFill" => in_solid = true,
                        b"srgbClr" if in_solid => {
                            let val = attr_value(e, b"val")?.unwrap_or_default();
                            let color = RGBColor::from_hex(&val).ok_or_else(|| {
                                OoxmlError::InvalidFormat(format!("bad srgbClr value: {}", val))
                            })?;
                            return Ok(Some(Self::Solid { color }));
                        },
                        b"schemeClr" if in_solid => {
                            let name = attr_value(e, b"val")?.unwrap_or_default();
                            return Ok(Some(Self::Scheme { name }));
                        },
                        b"gradFill" => return Ok(Some(Self::Gradient)),
                        b"blipFill" => return Ok(Some(Self::Picture)),
                        b"pattFill" => return Ok(Some(Self::Pattern)),
                        b"bgRef" => {
                            let idx = attr_value(e, b"idx")?
                                .and_then(|v| v.parse().ok())
                                .unwrap_or(0);
                            return Ok(Some(Self::ThemeReference { idx }));
                        },
                        _ => {},
                    }
                },
                Ok(Event::End(ref e)) => {
                    if e.local_name().as_ref() == b"bg" {
                        break;
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
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_roundtrip() {
        let bg = SlideBackground::solid(RGBColor::from_u32(0x0D0D12));
        let mut xml = String::from(r#"<p:sld><p:cSld>"#);
        bg.write_xml(&mut xml).unwrap();
        xml.push_str("<p:spTree/></p:cSld></p:sld>");

        assert!(xml.contains(r#"<a:srgbClr val="0D0D12"/>"#));
        let parsed = SlideBackground::from_xml(xml.as_bytes()).unwrap();
        assert_eq!(parsed, Some(bg));
    }

    #[test]
    fn test_no_background() {
        let xml = br#"<p:sld><p:cSld><p:spTree><p:sp><p:spPr><a:solidFill><a:srgbClr val="FF0000"/></a:solidFill></p:spPr></p:sp></p:spTree></p:cSld></p:sld>"#;
        assert_eq!(SlideBackground::from_xml(xml).unwrap(), None);
    }

    #[test]
    fn test_other_fills() {
        let grad = br#"<p:cSld><p:bg><p:bgPr><a:gradFill><a:gsLst/></a:gradFill></p:bgPr></p:bg></p:cSld>"#;
        assert_eq!(
            SlideBackground::from_xml(grad).unwrap(),
            Some(SlideBackground::Gradient)
        );

        let bg_ref = br#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg></p:cSld>"#;
        assert_eq!(
            SlideBackground::from_xml(bg_ref).unwrap(),
            Some(SlideBackground::ThemeReference { idx: 1001 })
        );

        let scheme = br#"<p:cSld><p:bg><p:bgPr><a:solidFill><a:schemeClr val="accent1"/></a:solidFill></p:bgPr></p:bg></p:cSld>"#;
        let parsed = SlideBackground::from_xml(scheme).unwrap().unwrap();
        assert_eq!(parsed.color(), None);
        assert_eq!(
            parsed,
            SlideBackground::Scheme {
                name: "accent1".to_string()
            }
        );
    }

    #[test]
    fn test_write_unsupported() {
        let mut xml = String::new();
        assert!(SlideBackground::Gradient.write_xml(&mut xml).is_err());
    }
}
