/// Shapes read from a slide's shape tree.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::format::TextParagraph;
use crate::ooxml::pptx::shapes::textframe::TextFrame;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fmt;

const URI_CHART: &[u8] = b"http://schemas.openxmlformats.org/drawingml/2006/chart";
const URI_TABLE: &[u8] = b"http://schemas.openxmlformats.org/drawingml/2006/table";
const URI_OLE: &[u8] = b"http://schemas.openxmlformats.org/presentationml/2006/ole";

/// What kind of shape an element of the shape tree is.
///
/// `Display` renders the common shape-type enumeration label, e.g.
/// `TEXT_BOX (17)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `p:sp` with `cNvSpPr/@txBox="1"`
    TextBox,
    /// Any shape carrying `p:nvPr/p:ph`
    Placeholder,
    /// `p:sp` with a preset geometry
    AutoShape,
    /// `p:sp` with custom geometry
    Freeform,
    Picture,
    /// `p:pic` holding audio or video
    Media,
    Group,
    Table,
    Chart,
    EmbeddedOleObject,
    /// Connector (`p:cxnSp`)
    Line,
    /// A graphic frame holding anything else (SmartArt, ink, ...)
    GraphicFrame,
}

impl ShapeKind {
    /// Numeric value in the shape-type enumeration, where one exists.
    pub fn type_id(&self) -> Option<u32> {
        match self {
            Self::AutoShape => Some(1),
            Self::Chart => Some(3),
            Self::Freeform => Some(5),
            Self::Group => Some(6),
            Self::EmbeddedOleObject => Some(7),
            Self::Line => Some(9),
            Self::Picture => Some(13),
            Self::Placeholder => Some(14),
            Self::Media => Some(16),
            Self::TextBox => Some(17),
            Self::Table => Some(19),
            Self::GraphicFrame => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TextBox => "TEXT_BOX",
            Self::Placeholder => "PLACEHOLDER",
            Self::AutoShape => "AUTO_SHAPE",
            Self::Freeform => "FREEFORM",
            Self::Picture => "PICTURE",
            Self::Media => "MEDIA",
            Self::Group => "GROUP",
            Self::Table => "TABLE",
            Self::Chart => "CHART",
            Self::EmbeddedOleObject => "EMBEDDED_OLE_OBJECT",
            Self::Line => "LINE",
            Self::GraphicFrame => "GRAPHIC_FRAME",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_id() {
            Some(id) => write!(f, "{} ({})", self.label(), id),
            None => f.write_str(self.label()),
        }
    }
}

/// Shape geometry (position and size) in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeGeometry {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// One element of a slide's shape tree.
///
/// Kind, name and geometry are resolved in a single pass when the shape is
/// created; text is parsed on demand.
///
/// # Examples
///
/// ```rust,ignore
/// for shape in slide.shapes()? {
///     if let Some(text) = shape.text()? {
///         println!("[{}] {}", shape.kind(), text);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BaseShape {
    /// Raw XML of the element, start tag through end tag
    xml_bytes: Vec<u8>,
    /// Local name of the element (`sp`, `pic`, ...)
    element: &'static str,
    kind: ShapeKind,
    name: String,
    geometry: Option<ShapeGeometry>,
}

impl BaseShape {
    /// Local names of the elements that make up a shape tree.
    pub(crate) fn element_name(local_name: &[u8]) -> Option<&'static str> {
        match local_name {
            b"sp" => Some("sp"),
            b"pic" => Some("pic"),
            b"graphicFrame" => Some("graphicFrame"),
            b"grpSp" => Some("grpSp"),
            b"cxnSp" => Some("cxnSp"),
            _ => None,
        }
    }

    /// Build a shape from the XML of a shape-tree element.
    pub fn from_xml(element: &'static str, xml_bytes: Vec<u8>) -> Result<Self> {
        let scan = ShapeScan::run(element, &xml_bytes)?;

        let kind = match element {
            "grpSp" => ShapeKind::Group,
            "cxnSp" => ShapeKind::Line,
            _ if scan.placeholder => ShapeKind::Placeholder,
            "pic" if scan.media => ShapeKind::Media,
            "pic" => ShapeKind::Picture,
            "graphicFrame" => match scan.graphic_data_uri.as_deref() {
                Some(URI_CHART) => ShapeKind::Chart,
                Some(URI_TABLE) => ShapeKind::Table,
                Some(URI_OLE) => ShapeKind::EmbeddedOleObject,
                _ => ShapeKind::GraphicFrame,
            },
            _ if scan.custom_geometry => ShapeKind::Freeform,
            _ if scan.text_box => ShapeKind::TextBox,
            _ => ShapeKind::AutoShape,
        };

        Ok(Self {
            xml_bytes,
            element,
            kind,
            name: scan.name,
            geometry: scan.geometry,
        })
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Name from `cNvPr/@name`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position and size from the shape's transform, if it has one.
    #[inline]
    pub fn geometry(&self) -> Option<ShapeGeometry> {
        self.geometry
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == ShapeKind::Placeholder
    }

    /// Only `p:sp` elements carry a text frame.
    pub fn has_text_frame(&self) -> bool {
        self.element == "sp"
    }

    pub fn text_frame(&self) -> Option<TextFrame<'_>> {
        self.has_text_frame()
            .then(|| TextFrame::from_xml(&self.xml_bytes))
    }

    /// Text of the shape, paragraphs joined with `\n`; soft line breaks
    /// read as `\v`.
    ///
    /// `None` for shapes without a text frame. A text shape with no
    /// `p:txBody` has empty text.
    pub fn text(&self) -> Result<Option<String>> {
        match self.text_frame() {
            Some(tf) => Ok(Some(tf.text()?)),
            None => Ok(None),
        }
    }

    pub fn paragraphs(&self) -> Result<Vec<TextParagraph>> {
        match self.text_frame() {
            Some(tf) => tf.paragraphs(),
            None => Ok(Vec::new()),
        }
    }

    #[inline]
    pub fn xml_bytes(&self) -> &[u8] {
        &self.xml_bytes
    }
}

/// Facts gathered in one pass over a shape element.
#[derive(Debug, Default)]
struct ShapeScan {
    name: String,
    text_box: bool,
    placeholder: bool,
    custom_geometry: bool,
    media: bool,
    graphic_data_uri: Option<Vec<u8>>,
    geometry: Option<ShapeGeometry>,
}

impl ShapeScan {
    fn run(element: &str, xml: &[u8]) -> Result<Self> {
        let mut scan = Self::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        // Nested shapes of a group must not leak into the group's facts,
        // so only the first non-visual block and transform are read.
        let mut seen_name = false;
        let mut in_nv = false;
        let mut in_xfrm = false;
        let mut geometry: Option<ShapeGeometry> = None;
        let mut depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    depth += 1;
                    scan.visit(
                        e,
                        element,
                        depth,
                        &mut seen_name,
                        &mut in_nv,
                        &mut in_xfrm,
                        &mut geometry,
                    )?;
                },
                Ok(Event::Empty(ref e)) => {
                    scan.visit(
                        e,
                        element,
                        depth + 1,
                        &mut seen_name,
                        &mut in_nv,
                        &mut in_xfrm,
                        &mut geometry,
                    )?;
                },
                Ok(Event::End(ref e)) => {
                    depth = depth.saturating_sub(1);
                    match e.local_name().as_ref() {
                        b"nvSpPr" | b"nvPicPr" | b"nvGraphicFramePr" | b"nvGrpSpPr"
                        | b"nvCxnSpPr" => in_nv = false,
                        b"xfrm" if in_xfrm => {
                            in_xfrm = false;
                            if scan.geometry.is_none() {
                                scan.geometry = geometry.take();
                            }
                        },
                        _ => {},
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(scan)
    }

    #[allow(clippy::too_many_arguments)]
    fn visit(
        &mut self,
        e: &BytesStart<'_>,
        element: &str,
        depth: usize,
        seen_name: &mut bool,
        in_nv: &mut bool,
        in_xfrm: &mut bool,
        geometry: &mut Option<ShapeGeometry>,
    ) -> Result<()> {
        // Depth 1 is the shape element itself, 2 its direct children
        match e.local_name().as_ref() {
            b"nvSpPr" | b"nvPicPr" | b"nvGraphicFramePr" | b"nvGrpSpPr" | b"nvCxnSpPr"
                if depth == 2 =>
            {
                *in_nv = true;
            },
            b"cNvPr" if *in_nv && !*seen_name => {
                *seen_name = true;
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"name" {
                        self.name = attr.unescape_value()?.into_owned();
                    }
                }
            },
            b"cNvSpPr" if *in_nv => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"txBox" {
                        self.text_box = matches!(attr.value.as_ref(), b"1" | b"true");
                    }
                }
            },
            b"ph" if *in_nv => self.placeholder = true,
            b"videoFile" | b"audioFile" | b"quickTimeFile" if *in_nv => self.media = true,
            b"custGeom" if depth == 3 && element == "sp" => self.custom_geometry = true,
            b"xfrm" if depth <= 3 && self.geometry.is_none() => {
                *in_xfrm = true;
                *geometry = Some(ShapeGeometry::default());
            },
            b"off" if *in_xfrm => {
                if let Some(g) = geometry.as_mut() {
                    g.x = int_attr(e, b"x")?;
                    g.y = int_attr(e, b"y")?;
                }
            },
            b"ext" if *in_xfrm => {
                if let Some(g) = geometry.as_mut() {
                    g.cx = int_attr(e, b"cx")?;
                    g.cy = int_attr(e, b"cy")?;
                }
            },
            b"graphicData" if self.graphic_data_uri.is_none() => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"uri" {
                        self.graphic_data_uri = Some(attr.value.into_owned());
                    }
                }
            },
            _ => {},
        }
        Ok(())
    }
}

fn int_attr(e: &BytesStart<'_>, key: &[u8]) -> Result<i64> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            let value = std::str::from_utf8(&attr.value)?;
            return value.parse::<i64>().map_err(|err| {
                OoxmlError::Xml(format!(
                    "invalid {} value {:?}: {}",
                    String::from_utf8_lossy(key),
                    value,
                    err
                ))
            });
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(element: &'static str, xml: &str) -> BaseShape {
        BaseShape::from_xml(element, xml.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_labels() {
        assert_eq!(ShapeKind::TextBox.to_string(), "TEXT_BOX (17)");
        assert_eq!(ShapeKind::Placeholder.to_string(), "PLACEHOLDER (14)");
        assert_eq!(ShapeKind::AutoShape.to_string(), "AUTO_SHAPE (1)");
        assert_eq!(ShapeKind::Table.to_string(), "TABLE (19)");
        assert_eq!(ShapeKind::GraphicFrame.to_string(), "GRAPHIC_FRAME");
    }

    #[test]
    fn test_text_box() {
        let sp = shape(
            "sp",
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="TextBox 1"><a:extLst><a:ext uri="{X}"/></a:extLst></p:cNvPr><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
               <p:spPr><a:xfrm><a:off x="457200" y="1828800"/><a:ext cx="8229600" cy="1097280"/></a:xfrm><a:prstGeom prst="rect"/></p:spPr>
               <p:txBody><a:bodyPr/><a:p><a:r><a:t>SKIFIN</a:t></a:r></a:p></p:txBody></p:sp>"#,
        );
        assert_eq!(sp.kind(), ShapeKind::TextBox);
        assert_eq!(sp.name(), "TextBox 1");
        assert_eq!(
            sp.geometry(),
            Some(ShapeGeometry {
                x: 457_200,
                y: 1_828_800,
                cx: 8_229_600,
                cy: 1_097_280
            })
        );
        assert_eq!(sp.text().unwrap().as_deref(), Some("SKIFIN"));
    }

    #[test]
    fn test_placeholder_and_autoshape() {
        let ph = shape(
            "sp",
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/></p:sp>"#,
        );
        assert!(ph.is_placeholder());
        assert_eq!(ph.text().unwrap().as_deref(), Some(""));
        assert_eq!(ph.geometry(), None);

        let rect = shape(
            "sp",
            r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Rectangle 2"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:prstGeom prst="rect"/></p:spPr></p:sp>"#,
        );
        assert_eq!(rect.kind(), ShapeKind::AutoShape);
    }

    #[test]
    fn test_graphic_frames() {
        let table = shape(
            "graphicFrame",
            r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="4" name="Table 3"/><p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr>
               <p:xfrm><a:off x="1" y="2"/><a:ext cx="3" cy="4"/></p:xfrm>
               <a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl><a:tr><a:tc><a:txBody><a:p><a:r><a:t>cell</a:t></a:r></a:p></a:txBody></a:tc></a:tr></a:tbl></a:graphicData></a:graphic></p:graphicFrame>"#,
        );
        assert_eq!(table.kind(), ShapeKind::Table);
        assert_eq!(table.text().unwrap(), None);
        assert_eq!(table.geometry().map(|g| g.cx), Some(3));
    }

    #[test]
    fn test_group_ignores_children() {
        let group = shape(
            "grpSp",
            r#"<p:grpSp><p:nvGrpSpPr><p:cNvPr id="5" name="Group 4"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
               <p:grpSpPr><a:xfrm><a:off x="10" y="20"/><a:ext cx="30" cy="40"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
               <p:sp><p:nvSpPr><p:cNvPr id="6" name="Inner"/><p:cNvSpPr txBox="1"/><p:nvPr><p:ph/></p:nvPr></p:nvSpPr>
               <p:spPr><a:xfrm><a:off x="99" y="99"/><a:ext cx="99" cy="99"/></a:xfrm></p:spPr></p:sp></p:grpSp>"#,
        );
        assert_eq!(group.kind(), ShapeKind::Group);
        assert_eq!(group.name(), "Group 4");
        assert_eq!(
            group.geometry(),
            Some(ShapeGeometry {
                x: 10,
                y: 20,
                cx: 30,
                cy: 40
            })
        );
        assert_eq!(group.text().unwrap(), None);
    }
}
