//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are English Metric Units (EMU); font sizes
//! are hundredths of a point and paragraph spacing is hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Centipoints per point, the unit of `sz` and `spcPts/@val`.
pub const CENTIPOINTS_PER_PT: u32 = 100;

/// Convert inches to EMU, rounding to the nearest unit.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

/// Convert points to EMU.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Convert a whole point size to the centipoint value stored in `sz`.
#[inline]
pub fn pt_to_centipoints(pt: u32) -> u32 {
    pt.saturating_mul(CENTIPOINTS_PER_PT)
}

/// Convert a centipoint value back to whole points, dropping any fraction.
#[inline]
pub fn centipoints_to_pt(centipoints: u32) -> u32 {
    centipoints / CENTIPOINTS_PER_PT
}

/// Format an EMU value as inches, trimming a trailing `.0` and stray zeros.
///
/// `9144000` becomes `"10"` and `6858000` becomes `"7.5"`.
pub fn format_inches(emu: i64) -> String {
    let value = emu_to_inches(emu);
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(7.5), 6_858_000);
        assert_eq!(inches(0.95), 868_680);
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(pt_to_centipoints(36), 3600);
        assert_eq!(centipoints_to_pt(1400), 14);
        assert_eq!(pt_to_emu(6.0), 76_200);
    }

    #[test]
    fn test_format_inches() {
        assert_eq!(format_inches(9_144_000), "10");
        assert_eq!(format_inches(6_858_000), "7.5");
        assert_eq!(format_inches(inches(13.333)), "13.333");
    }
}
