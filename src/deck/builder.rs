//! Slide templates.
//!
//! Each `add_*` function appends exactly one slide to the deck, on the
//! "Blank" layout with a solid background, and lays out its text boxes at
//! fixed coordinates. Literal content goes in unchanged apart from the
//! bullet prefixes.
use crate::common::RGBColor;
use crate::common::error::Result;
use crate::common::unit::inches;
use crate::deck::palette::Palette;
use crate::ooxml::pptx::template::BLANK_LAYOUT;
use crate::ooxml::pptx::{
    Alignment, MutablePresentation, MutableShape, MutableSlide, SlideBackground, TextParagraph,
};

const BULLET: &str = "• ";
const SUB_BULLET: &str = "  ◦ ";

/// Stat cards per row of the stats grid.
pub const STATS_PER_ROW: usize = 4;

/// The visual templates a slide can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Title,
    Overview,
    Practice,
    SectionTitleOnly,
    Content,
    /// Accent-coloured divider between sections
    SectionDivider,
    TwoColumn,
    Stats,
}

impl Template {
    /// Solid background colour of the template.
    pub fn background(&self) -> RGBColor {
        match self {
            Self::SectionDivider => Palette::ACCENT,
            _ => Palette::DARK_BG,
        }
    }
}

/// Append a blank slide with the template's background.
fn new_slide(deck: &mut MutablePresentation, template: Template) -> Result<&mut MutableSlide> {
    let slide = deck.add_slide(BLANK_LAYOUT)?;
    slide.set_background(SlideBackground::solid(template.background()));
    Ok(slide)
}

/// Add a text box; all arguments in inches.
fn text_box(
    slide: &mut MutableSlide,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> &mut MutableShape {
    slide.add_text_box(inches(left), inches(top), inches(width), inches(height))
}

/// Title and, when non-empty, a subtitle underneath.
pub fn add_title_slide<'a>(
    deck: &'a mut MutablePresentation,
    title: &str,
    subtitle: &str,
) -> Result<&'a mut MutableSlide> {
    let slide = new_slide(deck, Template::Title)?;
    text_box(slide, 0.5, 2.0, 9.0, 1.2).set_text(
        TextParagraph::new(title)
            .size(36)
            .bold()
            .color(Palette::WHITE),
    );
    if !subtitle.is_empty() {
        text_box(slide, 0.5, 3.2, 9.0, 1.0)
            .set_text(TextParagraph::new(subtitle).size(20).color(Palette::GRAY));
    }
    Ok(slide)
}

/// Title, subtitle, two pillars side by side and a mission statement.
pub fn add_overview_slide<'a>(
    deck: &'a mut MutablePresentation,
    title: &str,
    subtitle: &str,
    pillar1: &str,
    pillar2: &str,
    mission: &str,
) -> Result<&'a mut MutableSlide> {
    let slide = new_slide(deck, Template::Overview)?;
    text_box(slide, 0.5, 0.5, 9.0, 0.7).set_text(
        TextParagraph::new(title)
            .size(28)
            .bold()
            .color(Palette::ACCENT),
    );
    text_box(slide, 0.5, 1.2, 9.0, 0.5)
        .set_text(TextParagraph::new(subtitle).size(16).color(Palette::GRAY));

    for (label, left) in [(pillar1, 1.0), (pillar2, 5.0)] {
        text_box(slide, left, 2.2, 3.5, 0.8).set_text(
            TextParagraph::new(label)
                .size(18)
                .bold()
                .color(Palette::WHITE),
        );
    }

    text_box(slide, 0.5, 3.8, 9.0, 2.0)
        .set_word_wrap(true)
        .set_text(
            TextParagraph::new(format!("Mission: {}", mission))
                .size(14)
                .italic()
                .color(Palette::WHITE),
        );
    Ok(slide)
}

/// A single large centred title and no body.
pub fn add_section_title_only<'a>(
    deck: &'a mut MutablePresentation,
    title: &str,
) -> Result<&'a mut MutableSlide> {
    let slide = new_slide(deck, Template::SectionTitleOnly)?;
    text_box(slide, 0.5, 2.6, 9.0, 1.4).set_text(
        TextParagraph::new(title)
            .size(32)
            .bold()
            .color(Palette::ACCENT)
            .align(Alignment::Center),
    );
    Ok(slide)
}

/// Title, subtitle, a bullet list and an optional italic footer.
pub fn add_practice_slide<'a>(
    deck: &'a mut MutablePresentation,
    title: &str,
    subtitle: &str,
    bullets: &[&str],
    footer: Option<&str>,
) -> Result<&'a mut MutableSlide> {
    let slide = new_slide(deck, Template::Practice)?;
    text_box(slide, 0.5, 0.4, 9.0, 0.6).set_text(
        TextParagraph::new(title)
            .size(26)
            .bold()
            .color(Palette::ACCENT),
    );
    text_box(slide, 0.5, 0.95, 9.0, 0.4)
        .set_text(TextParagraph::new(subtitle).size(14).color(Palette::GRAY));

    let body = text_box(slide, 0.5, 1.5, 9.0, 4.5).set_word_wrap(true);
    fill_list(body, bullets.iter().map(|item| {
        TextParagraph::new(format!("{}{}", BULLET, item))
            .size(15)
            .color(Palette::WHITE)
            .space_after(6)
    }));

    if let Some(footer) = footer.filter(|f| !f.is_empty()) {
        text_box(slide, 0.5, 6.2, 9.0, 0.5).set_text(
            TextParagraph::new(footer)
                .size(11)
                .italic()
                .color(Palette::GRAY),
        );
    }
    Ok(slide)
}

/// Title and a bullet list, with optional grey sub-bullets after the bullets.
pub fn add_content_slide<'a>(
    deck: &'a mut MutablePresentation,
    title: &str,
    bullets: &[&str],
    sub_bullets: &[&str],
) -> Result<&'a mut MutableSlide> {
    let slide = new_slide(deck, Template::Content)?;
    text_box(slide, 0.5, 0.4, 9.0, 0.8).set_text(
        TextParagraph::new(title)
            .size(28)
            .bold()
            .color(Palette::ACCENT),
    );

    let body = text_box(slide, 0.5, 1.3, 9.0, 5.5).set_word_wrap(true);
    fill_list(body, bullets.iter().map(|item| {
        TextParagraph::new(format!("{}{}", BULLET, item))
            .size(16)
            .color(Palette::WHITE)
            .space_after(8)
    }));
    // Sub-bullets always follow the initial paragraph, even when it is empty
    for item in sub_bullets {
        body.add_paragraph(
            TextParagraph::new(format!("{}{}", SUB_BULLET, item))
                .size(14)
                .color(Palette::GRAY)
                .space_after(4),
        );
    }
    Ok(slide)
}

/// Section divider: centred white title on the accent colour.
pub fn add_section_slide<'a>(
    deck: &'a mut MutablePresentation,
    title: &str,
) -> Result<&'a mut MutableSlide> {
    let slide = new_slide(deck, Template::SectionDivider)?;
    text_box(slide, 0.5, 2.5, 9.0, 1.2).set_text(
        TextParagraph::new(title)
            .size(32)
            .bold()
            .color(Palette::WHITE)
            .align(Alignment::Center),
    );
    Ok(slide)
}

/// Title and two bulleted columns, each headed by its own title.
pub fn add_two_column_slide<'a>(
    deck: &'a mut MutablePresentation,
    title: &str,
    left_title: &str,
    left_items: &[&str],
    right_title: &str,
    right_items: &[&str],
) -> Result<&'a mut MutableSlide> {
    let slide = new_slide(deck, Template::TwoColumn)?;
    text_box(slide, 0.5, 0.4, 9.0, 0.7).set_text(
        TextParagraph::new(title)
            .size(26)
            .bold()
            .color(Palette::ACCENT),
    );

    let columns = [(0.5, left_title, left_items), (5.0, right_title, right_items)];
    for (left, heading, items) in columns {
        let column = text_box(slide, left, 1.2, 4.2, 5.5);
        column.set_text(
            TextParagraph::new(heading)
                .size(18)
                .bold()
                .color(Palette::WHITE),
        );
        for item in items {
            column.add_paragraph(
                TextParagraph::new(format!("{}{}", BULLET, item))
                    .size(14)
                    .color(Palette::WHITE)
                    .space_after(4),
            );
        }
    }
    Ok(slide)
}

/// `(column, row)` of the `index`-th card in the stats grid.
#[inline]
pub fn stat_cell(index: usize) -> (usize, usize) {
    (index % STATS_PER_ROW, index / STATS_PER_ROW)
}

/// Title and a grid of stat cards, four per row, each a value over a label.
pub fn add_stats_slide<'a>(
    deck: &'a mut MutablePresentation,
    title: &str,
    stats: &[(&str, &str)],
) -> Result<&'a mut MutableSlide> {
    let slide = new_slide(deck, Template::Stats)?;
    text_box(slide, 0.5, 0.4, 9.0, 0.7).set_text(
        TextParagraph::new(title)
            .size(26)
            .bold()
            .color(Palette::ACCENT),
    );

    for (i, (value, label)) in stats.iter().enumerate() {
        let (col, row) = stat_cell(i);
        let left = 0.6 + col as f64 * 2.3;
        let top = 1.4 + row as f64 * 1.8;
        text_box(slide, left, top, 2.1, 1.4)
            .set_text(
                TextParagraph::new(*value)
                    .size(28)
                    .bold()
                    .color(Palette::WHITE),
            )
            .add_paragraph(TextParagraph::new(*label).size(12).color(Palette::GRAY));
    }
    Ok(slide)
}

/// First item fills the initial paragraph, the rest are appended.
fn fill_list(shape: &mut MutableShape, items: impl IntoIterator<Item = TextParagraph>) {
    for (i, paragraph) in items.into_iter().enumerate() {
        if i == 0 {
            shape.set_text(paragraph);
        } else {
            shape.add_paragraph(paragraph);
        }
    }
}
