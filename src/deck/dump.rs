//! Plain-text structure report of an existing deck.
//!
//! Lists every slide's text-bearing shapes with their kind, followed by the
//! layouts of the first slide master.
use crate::common::error::{Error, Result};
use crate::common::unit::format_inches;
use crate::ooxml::pptx::{Package, Presentation};
use log::debug;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};

/// Deck inspected by `dump-structure` when no input is given.
pub const DEFAULT_INPUT: &str = "Digital_Security_Services_DSS_Presentation.pptx";
/// Report written by `dump-structure` when no output is given.
pub const DEFAULT_OUTPUT: &str = "scripts/dss_structure.txt";

/// Shape text longer than this many characters is cut and marked with `...`.
pub const MAX_TEXT_CHARS: usize = 200;

/// What [`dump`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    /// The input deck does not exist; nothing was written.
    InputMissing { path: PathBuf },
    Written {
        path: PathBuf,
        slides: usize,
        /// Slide size in EMUs
        width: i64,
        height: i64,
    },
}

/// Diagnostic printed when the input deck does not exist.
pub fn missing_input_message(path: &Path) -> String {
    format!("DSS file not found: {}", path.display())
}

/// Write the structure report of `input` to `output`.
///
/// A missing input is not an error: it is logged and reported as
/// [`DumpOutcome::InputMissing`] without touching `output`, and the caller
/// prints [`missing_input_message`]. Any failure to read the deck or write
/// the report propagates.
pub fn dump<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<DumpOutcome> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        debug!("{}", missing_input_message(input));
        return Ok(DumpOutcome::InputMissing {
            path: input.to_path_buf(),
        });
    }

    let package = Package::open(input)?;
    let pres = package.presentation()?;
    let (width, height) = slide_size(&pres)?;
    let report = render_report(&pres)?;

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, report.as_bytes())?;
    debug!("Written: {}", output.display());

    Ok(DumpOutcome::Written {
        path: output.to_path_buf(),
        slides: pres.slide_count()?,
        width,
        height,
    })
}

fn slide_size(pres: &Presentation<'_>) -> Result<(i64, i64)> {
    pres.slide_size()?
        .ok_or_else(|| Error::ComponentNotFound("slide size (p:sldSz)".to_string()))
}

/// Render the report for an opened presentation.
pub fn render_report(pres: &Presentation<'_>) -> Result<String> {
    let (width, height) = slide_size(pres)?;
    let slides = pres.slides()?;

    let mut out = String::with_capacity(256 + slides.len() * 256);
    let fmt_err = |e: std::fmt::Error| Error::Other(e.to_string());

    writeln!(out, "=== DSS Presentation Structure ===").map_err(fmt_err)?;
    writeln!(
        out,
        "Slide size: {} x {} emu ({} x {} in)",
        width,
        height,
        format_inches(width),
        format_inches(height)
    )
    .map_err(fmt_err)?;
    writeln!(out, "Slides: {}", slides.len()).map_err(fmt_err)?;
    writeln!(out).map_err(fmt_err)?;
    writeln!(out, "--- Slide-by-slide ---").map_err(fmt_err)?;

    for (i, slide) in slides.iter().enumerate() {
        writeln!(out, "--- Slide {} ---", i + 1).map_err(fmt_err)?;
        for shape in slide.shapes()? {
            let Some(text) = shape.text()? else {
                continue;
            };
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            writeln!(out, "  [{}] {}", shape.kind(), truncate(text)).map_err(fmt_err)?;
        }
        writeln!(out).map_err(fmt_err)?;
    }

    writeln!(out, "=== Layouts ===").map_err(fmt_err)?;
    for (i, layout) in pres.slide_layouts()?.iter().enumerate() {
        writeln!(out, "  Layout {}: {}", i, layout.name()?).map_err(fmt_err)?;
    }

    Ok(out)
}

/// Cut `text` to [`MAX_TEXT_CHARS`] characters, appending `...` when cut.
fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_TEXT_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::assembler;
    use crate::deck::builder::{add_content_slide, add_section_slide, add_title_slide};
    use crate::ooxml::pptx::MutablePresentation;

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.txt");
        let input = dir.path().join("absent.pptx");
        let outcome = dump(&input, &output).unwrap();
        assert_eq!(outcome, DumpOutcome::InputMissing { path: input });
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_message_ignores_log_level() {
        log::set_max_level(log::LevelFilter::Off);
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.pptx");
        let output = dir.path().join("report.txt");

        let DumpOutcome::InputMissing { path } = dump(&input, &output).unwrap() else {
            panic!("expected a missing input");
        };
        assert_eq!(
            missing_input_message(&path),
            format!("DSS file not found: {}", input.display())
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_report_for_assembled_deck() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.pptx");
        let output = dir.path().join("scripts").join("structure.txt");
        assembler::save(&input).unwrap();

        let outcome = dump(&input, &output).unwrap();
        assert_eq!(
            outcome,
            DumpOutcome::Written {
                path: output.clone(),
                slides: 16,
                width: 9_144_000,
                height: 6_858_000,
            }
        );

        let report = fs::read_to_string(&output).unwrap();
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("=== DSS Presentation Structure ==="));
        assert_eq!(lines.next(), Some("Slide size: 9144000 x 6858000 emu (10 x 7.5 in)"));
        assert_eq!(lines.next(), Some("Slides: 16"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("--- Slide-by-slide ---"));
        assert_eq!(lines.next(), Some("--- Slide 1 ---"));
        assert_eq!(lines.next(), Some("  [TEXT_BOX (17)] SKIFIN"));

        let blocks = report
            .lines()
            .filter(|l| l.starts_with("--- Slide ") && l.ends_with(" ---"))
            .count();
        assert_eq!(blocks, 16);
        assert!(report.contains("--- Slide 16 ---\n  [TEXT_BOX (17)] Thank You / Contact\n"));
        assert!(report.contains("=== Layouts ===\n  Layout 0: Title Slide\n"));
        assert!(report.contains("  Layout 6: Blank\n"));
        assert!(report.ends_with("  Layout 10: Vertical Title and Text\n"));
    }

    #[test]
    fn test_multi_paragraph_shape_keeps_newlines() {
        let mut deck = MutablePresentation::new();
        add_content_slide(&mut deck, "List", &["a", "b"], &[]).unwrap();
        let pkg = Package::from_bytes(deck.to_bytes().unwrap()).unwrap();
        let report = render_report(&pkg.presentation().unwrap()).unwrap();
        assert!(report.contains("  [TEXT_BOX (17)] • a\n• b\n"));
    }

    #[test]
    fn test_empty_shapes_are_skipped() {
        let mut deck = MutablePresentation::new();
        add_title_slide(&mut deck, "   ", "").unwrap();
        add_section_slide(&mut deck, "Divider").unwrap();
        let pkg = Package::from_bytes(deck.to_bytes().unwrap()).unwrap();
        let report = render_report(&pkg.presentation().unwrap()).unwrap();
        assert!(
            report.contains("--- Slide 1 ---\n\n--- Slide 2 ---\n  [TEXT_BOX (17)] Divider\n\n")
        );
    }

    #[test]
    fn test_truncate_counts_chars() {
        let short = "é".repeat(MAX_TEXT_CHARS);
        assert_eq!(truncate(&short), short);

        let long = "é".repeat(MAX_TEXT_CHARS + 1);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_TEXT_CHARS + 3);
        assert!(cut.ends_with("é..."));
    }
}
