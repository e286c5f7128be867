//! Brand colours used by the slide templates.
use crate::common::RGBColor;

/// The fixed four-colour palette of the deck's dark theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette;

impl Palette {
    /// Slide background for every template except the section divider.
    pub const DARK_BG: RGBColor = RGBColor::from_u32(0x0D0D12);
    /// Indigo accent: titles, and the section divider background.
    pub const ACCENT: RGBColor = RGBColor::from_u32(0x6366F1);
    pub const WHITE: RGBColor = RGBColor::from_u32(0xFFFFFF);
    /// Subtitles, footers and secondary text.
    pub const GRAY: RGBColor = RGBColor::from_u32(0xA1A1AA);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex() {
        assert_eq!(Palette::DARK_BG.to_hex(), "0D0D12");
        assert_eq!(Palette::ACCENT.to_hex(), "6366F1");
        assert_eq!(Palette::WHITE.to_hex(), "FFFFFF");
        assert_eq!(Palette::GRAY.to_hex(), "A1A1AA");
    }
}
