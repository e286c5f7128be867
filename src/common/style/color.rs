use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// DrawingML stores these as six hex digits in `<a:srgbClr val="..."/>`.
///
/// # Examples
///
/// ```rust
/// use deckhand::common::RGBColor;
///
/// let accent = RGBColor::from_hex("6366F1").unwrap();
/// assert_eq!(accent, RGBColor::new(0x63, 0x66, 0xF1));
/// assert_eq!(accent.to_hex(), "6366F1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Create an RGB color from a hex string, with or without a leading `#`.
    ///
    /// Returns `None` for anything that is not exactly six hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert to an upper-case hex string without the `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(RGBColor::from_hex("#0D0D12"), Some(RGBColor::new(13, 13, 18)));
        assert_eq!(RGBColor::from_hex("a1a1aa"), Some(RGBColor::new(0xA1, 0xA1, 0xAA)));
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
    }

    #[test]
    fn test_from_u32() {
        assert_eq!(RGBColor::from_u32(0x6366F1), RGBColor::new(0x63, 0x66, 0xF1));
        assert_eq!(RGBColor::from_u32(0xFFFFFF).to_string(), "#FFFFFF");
    }

    proptest! {
        #[test]
        fn hex_round_trips(r: u8, g: u8, b: u8) {
            let color = RGBColor::new(r, g, b);
            prop_assert_eq!(RGBColor::from_hex(&color.to_hex()), Some(color));
        }
    }
}
