/// Text frame for accessing text content in shapes.
use crate::common::RGBColor;
use crate::common::unit::centipoints_to_pt;
use crate::common::xml::named_entity;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::format::{Alignment, TextParagraph};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// What an `a:br` reads back as: a vertical tab, so soft breaks stay
/// distinguishable from the `\n` between paragraphs.
pub const LINE_BREAK: char = '\u{b}';

/// The `p:txBody` of a shape.
///
/// Paragraph formatting is read from the first run's `a:rPr`, falling back to
/// the paragraph's `a:defRPr` and then its `a:endParaRPr` for attributes the
/// run does not set.
///
/// # Examples
///
/// ```rust,ignore
/// let text_frame = shape.text_frame().unwrap();
/// for para in text_frame.paragraphs()? {
///     println!("{:?} {}", para.size_pt, para.text);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TextFrame<'a> {
    /// XML of the enclosing shape
    xml_bytes: &'a [u8],
}

/// Where run properties came from; higher wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PropsSource {
    None,
    EndParagraph,
    ParagraphDefault,
    Run,
}

impl<'a> TextFrame<'a> {
    pub(crate) fn from_xml(xml_bytes: &'a [u8]) -> Self {
        Self { xml_bytes }
    }

    /// Paragraph texts joined with `\n`.
    pub fn text(&self) -> Result<String> {
        let paragraphs = self.paragraphs()?;
        let mut text = String::new();
        for (i, para) in paragraphs.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(&para.text);
        }
        Ok(text)
    }

    /// `Some(true)` for `wrap="square"`, `Some(false)` for `wrap="none"`,
    /// `None` when inherited.
    pub fn word_wrap(&self) -> Result<Option<bool>> {
        let mut reader = Reader::from_reader(self.xml_bytes);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    if e.local_name().as_ref() == b"bodyPr" {
                        for attr in e.attributes() {
                            let attr = attr?;
                            if attr.key.as_ref() == b"wrap" {
                                return Ok(match attr.value.as_ref() {
                                    b"square" => Some(true),
                                    b"none" => Some(false),
                                    _ => None,
                                });
                            }
                        }
                        return Ok(None);
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

    /// All `a:p` paragraphs in document order.
    pub fn paragraphs(&self) -> Result<Vec<TextParagraph>> {
        // Run text keeps its whitespace, so no trimming here
        let mut reader = Reader::from_reader(self.xml_bytes);
        let mut buf = Vec::new();

        let mut paragraphs = Vec::new();
        let mut current: Option<TextParagraph> = None;
        let mut applied = PropsSource::None;
        // Source of the properties element being read, if it is being applied
        let mut in_props: Option<PropsSource> = None;
        let mut in_fill = false;
        let mut in_line = false;
        let mut in_spc_aft = false;
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"p" => {
                        current = Some(TextParagraph::default());
                        applied = PropsSource::None;
                    },
                    b"t" => in_text = current.is_some(),
                    b"spcAft" => in_spc_aft = true,
                    b"ln" | b"highlight" if in_props.is_some() => in_line = true,
                    b"solidFill" if in_props.is_some() && !in_line => in_fill = true,
                    _ => Self::handle_element(
                        e,
                        &mut current,
                        &mut applied,
                        &mut in_props,
                        in_fill,
                        in_spc_aft,
                        true,
                    )?,
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"p" => paragraphs.push(TextParagraph::default()),
                    _ => Self::handle_element(
                        e,
                        &mut current,
                        &mut applied,
                        &mut in_props,
                        in_fill,
                        in_spc_aft,
                        false,
                    )?,
                },
                Ok(Event::Text(ref e)) if in_text => {
                    if let Some(para) = current.as_mut() {
                        let t = std::str::from_utf8(e.as_ref())?;
                        para.text.push_str(t);
                    }
                },
                Ok(Event::CData(ref e)) if in_text => {
                    if let Some(para) = current.as_mut() {
                        para.text.push_str(std::str::from_utf8(e.as_ref())?);
                    }
                },
                Ok(Event::GeneralRef(ref e)) if in_text => {
                    if let Some(para) = current.as_mut() {
                        match e
                            .resolve_char_ref()
                            .map_err(|err| OoxmlError::Xml(err.to_string()))?
                        {
                            Some(ch) => para.text.push(ch),
                            None => {
                                let name = std::str::from_utf8(e.as_ref())?;
                                match named_entity(name) {
                                    Some(ch) => para.text.push(ch),
                                    None => {
                                        para.text.push('&');
                                        para.text.push_str(name);
                                        para.text.push(';');
                                    },
                                }
                            },
                        }
                    }
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"p" => {
                        if let Some(para) = current.take() {
                            paragraphs.push(para);
                        }
                    },
                    b"t" => in_text = false,
                    b"spcAft" => in_spc_aft = false,
                    b"ln" | b"highlight" => in_line = false,
                    b"solidFill" => in_fill = false,
                    b"rPr" | b"defRPr" | b"endParaRPr" => in_props = None,
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(paragraphs)
    }

    /// Handle a formatting element inside the current paragraph.
    fn handle_element(
        e: &BytesStart<'_>,
        current: &mut Option<TextParagraph>,
        applied: &mut PropsSource,
        in_props: &mut Option<PropsSource>,
        in_fill: bool,
        in_spc_aft: bool,
        is_start: bool,
    ) -> Result<()> {
        let Some(para) = current.as_mut() else {
            return Ok(());
        };

        match e.local_name().as_ref() {
            b"br" => para.text.push(LINE_BREAK),
            b"pPr" => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"algn" {
                        para.alignment = Alignment::from_attr(&attr.unescape_value()?);
                    }
                }
            },
            b"spcPts" if in_spc_aft => {
                if let Some(val) = parse_attr::<u32>(e, b"val")? {
                    para.space_after_pt = Some(centipoints_to_pt(val));
                }
            },
            name @ (b"rPr" | b"defRPr" | b"endParaRPr") => {
                let source = match name {
                    b"rPr" => PropsSource::Run,
                    b"defRPr" => PropsSource::ParagraphDefault,
                    _ => PropsSource::EndParagraph,
                };
                if source > *applied {
                    *applied = source;
                    apply_run_props(para, e)?;
                    if is_start {
                        *in_props = Some(source);
                    }
                }
            },
            b"srgbClr" if in_fill && in_props.is_some() => {
                if let Some(val) = parse_attr::<String>(e, b"val")? {
                    para.color = RGBColor::from_hex(&val);
                }
            },
            _ => {},
        }
        Ok(())
    }
}

fn apply_run_props(para: &mut TextParagraph, e: &BytesStart<'_>) -> Result<()> {
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"sz" => {
                let value = std::str::from_utf8(&attr.value)?;
                if let Ok(sz) = value.parse::<u32>() {
                    para.size_pt = Some(centipoints_to_pt(sz));
                }
            },
            b"b" => para.bold = is_true(&attr.value),
            b"i" => para.italic = is_true(&attr.value),
            _ => {},
        }
    }
    Ok(())
}

#[inline]
fn is_true(value: &[u8]) -> bool {
    matches!(value, b"1" | b"true" | b"on")
}

fn parse_attr<T: std::str::FromStr>(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<T>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(attr.unescape_value()?.parse::<T>().ok());
        }
    }
    Ok(None)
}
