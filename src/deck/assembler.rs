//! The fixed 16-slide SKIFIN company deck.
use crate::common::error::Result;
use crate::common::unit::inches;
use crate::deck::builder::{
    add_content_slide, add_overview_slide, add_practice_slide, add_section_title_only,
    add_title_slide,
};
use crate::ooxml::pptx::MutablePresentation;
use log::debug;
use std::path::Path;

/// Where `build-deck` writes the deck when no path is given.
pub const DEFAULT_OUTPUT: &str = "SKIFIN_Presentation.pptx";

/// Number of slides [`assemble`] produces.
pub const SLIDE_COUNT: usize = 16;

const DECK_TITLE: &str = "SKIFIN";

const OFFERINGS: [&str; 10] = [
    "AI Automation",
    "Cloud Security",
    "DevOps & DevSecOps",
    "AI/ML Solutions",
    "Data Analytics",
    "Cloud Migration",
    "Vibe Coding",
    "Implementation & Support",
    "Subsman — Hyper-local Delivery",
    "Intelligent CRM",
];

const PRACTICE_BULLETS: [&str; 5] = [
    "Architecture & Solution Design",
    "Product Deployment & Implementation",
    "Proof of Concepts (PoC), Pilots",
    "AI Automation, Cloud Security, DevOps, AI/ML, Data Analytics, Cloud Migration",
    "Vibe Coding — AI-augmented development",
];

const SUMMARY_BULLETS: [&str; 5] = [
    "500+ projects delivered | 98% client satisfaction | 50+ enterprise clients | 24/7 support",
    "15+ years experience | Open-source first | Scalable, secure solutions",
    "AI Services: Agentic AI, RPA, Zero Trust, CI/CD, Generative AI, BI, Cloud Migration, Vibe Coding",
    "Solutions: Subsman (milk, water, tiffin, grocery) and Intelligent CRM (pipelines, analytics)",
    "Mission: End-to-end, secure, scalable solutions across the AI and IT lifecycle.",
];

/// Build the complete deck in memory.
///
/// Order: title, overview, practice, "Offerings Overview", one title-only
/// slide per offering, summary, closing contact slide.
pub fn assemble() -> Result<MutablePresentation> {
    let mut deck = MutablePresentation::new();
    deck.set_slide_width(inches(10.0));
    deck.set_slide_height(inches(7.5));
    deck.set_title(DECK_TITLE);

    add_title_slide(
        &mut deck,
        DECK_TITLE,
        "AI-Assisted Solutions Through Vibe Coding | Professional AI & IT Services",
    )?;

    add_overview_slide(
        &mut deck,
        "SKIFIN Overview",
        "Introduction to SKIFIN",
        "AI Services (AS) — Automation, Security, DevOps, AI/ML, Data, Cloud, Vibe Coding",
        "Solutions (SO) — Subsman, Intelligent CRM",
        "Deliver end-to-end, scalable AI and IT solutions that accelerate digital transformation.",
    )?;

    add_practice_slide(
        &mut deck,
        "AI Services",
        "Consulting & Delivery",
        &PRACTICE_BULLETS,
        Some("Coverage: Across all technologies in the SKIFIN portfolio."),
    )?;

    add_section_title_only(&mut deck, "Offerings Overview")?;
    for offering in OFFERINGS {
        add_section_title_only(&mut deck, offering)?;
    }

    add_content_slide(&mut deck, "Summary & Differentiators", &SUMMARY_BULLETS, &[])?;

    add_title_slide(
        &mut deck,
        "Thank You / Contact",
        "contact@skifin.com  |  +91-8700605399  |  Galaxy Business Park, Sector 62, Noida",
    )?;

    debug!("Assembled deck with {} slides", deck.slide_count());
    Ok(deck)
}

/// Assemble the deck and write it to `path`.
///
/// The parent directory must exist; a missing one surfaces as an IO error.
pub fn save<P: AsRef<Path>>(path: P) -> Result<MutablePresentation> {
    let path = path.as_ref();
    let deck = assemble()?;
    deck.save(path)?;
    debug!("Presentation saved to: {}", path.display());
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::palette::Palette;
    use crate::ooxml::pptx::{Package, SlideBackground};

    #[test]
    fn test_assemble_slide_order() {
        let deck = assemble().unwrap();
        assert_eq!(deck.slide_count(), SLIDE_COUNT);
        assert_eq!(deck.slide_width(), 9_144_000);
        assert_eq!(deck.slide_height(), 6_858_000);

        let first_text = |i: usize| deck.slides()[i].shapes()[0].paragraphs()[0].text.clone();
        assert_eq!(first_text(0), "SKIFIN");
        assert_eq!(first_text(1), "SKIFIN Overview");
        assert_eq!(first_text(2), "AI Services");
        assert_eq!(first_text(3), "Offerings Overview");
        for (i, offering) in OFFERINGS.iter().enumerate() {
            assert_eq!(first_text(4 + i), *offering);
        }
        assert_eq!(first_text(14), "Summary & Differentiators");
        assert_eq!(first_text(15), "Thank You / Contact");
    }

    #[test]
    fn test_assemble_backgrounds() {
        let deck = assemble().unwrap();
        let dark = SlideBackground::solid(Palette::DARK_BG);
        assert!(deck.slides().iter().all(|s| s.background() == Some(&dark)));
    }

    #[test]
    fn test_summary_bullets_in_order() {
        let deck = assemble().unwrap();
        let body = &deck.slides()[14].shapes()[1];
        let texts: Vec<String> = body.paragraphs().iter().map(|p| p.text.clone()).collect();
        let expected: Vec<String> = SUMMARY_BULLETS.iter().map(|b| format!("• {}", b)).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        save(&path).unwrap();
        assert!(path.exists());

        let pkg = Package::open(&path).unwrap();
        let pres = pkg.presentation().unwrap();
        assert_eq!(pres.slide_count().unwrap(), SLIDE_COUNT);
        assert_eq!(pres.slide_size().unwrap(), Some((9_144_000, 6_858_000)));

        let slides = pres.slides().unwrap();
        assert_eq!(slides.len(), SLIDE_COUNT);
        assert_eq!(
            slides[0].background().unwrap().and_then(|b| b.color()),
            Some(Palette::DARK_BG)
        );

        let practice = slides[2].shapes().unwrap();
        let body = practice[2].text().unwrap().unwrap_or_default();
        assert_eq!(body.lines().count(), PRACTICE_BULLETS.len());
        assert_eq!(body.lines().next(), Some("• Architecture & Solution Design"));

        let footer = practice[3].paragraphs().unwrap();
        assert!(footer[0].italic);
        assert_eq!(footer[0].color, Some(Palette::GRAY));

        assert_eq!(
            slides[12].text().unwrap(),
            "Subsman — Hyper-local Delivery"
        );
        assert!(slides[15].text().unwrap().contains("contact@skifin.com  |  +91-8700605399"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_OUTPUT);
        assert!(save(&path).is_err());
        assert!(!path.exists());
    }
}
