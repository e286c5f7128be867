//! Paragraph formatting shared by the slide writer and the slide reader.

use crate::common::RGBColor;

/// Horizontal paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The ST_TextAlignType value.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "l" => Some(Self::Left),
            "ctr" => Some(Self::Center),
            "r" => Some(Self::Right),
            "just" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// One paragraph of a text frame: the text plus the run formatting applied
/// to all of it.
///
/// Unset fields fall back to whatever the slide layout and theme inherit.
///
/// # Examples
///
/// ```rust
/// use deckhand::common::RGBColor;
/// use deckhand::ooxml::pptx::{Alignment, TextParagraph};
///
/// let para = TextParagraph::new("Offerings Overview")
///     .size(32)
///     .bold()
///     .color(RGBColor::new(0x63, 0x66, 0xF1))
///     .align(Alignment::Center);
/// assert_eq!(para.size_pt, Some(32));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextParagraph {
    pub text: String,
    /// Font size in whole points
    pub size_pt: Option<u32>,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<RGBColor>,
    pub alignment: Option<Alignment>,
    /// Spacing after the paragraph in points
    pub space_after_pt: Option<u32>,
}

impl TextParagraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, pt: u32) -> Self {
        self.size_pt = Some(pt);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_after(mut self, pt: u32) -> Self {
        self.space_after_pt = Some(pt);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_attr() {
        for align in [
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
            Alignment::Justify,
        ] {
            assert_eq!(Alignment::from_attr(align.as_attr()), Some(align));
        }
        assert_eq!(Alignment::from_attr("dist"), None);
    }

    #[test]
    fn test_builder() {
        let para = TextParagraph::new("Mission").size(14).italic().space_after(4);
        assert_eq!(para.text, "Mission");
        assert_eq!(para.size_pt, Some(14));
        assert!(para.italic);
        assert!(!para.bold);
        assert_eq!(para.space_after_pt, Some(4));
        assert_eq!(para.color, None);
    }
}
