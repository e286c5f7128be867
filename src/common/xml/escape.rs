use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

const SPECIAL_CHARS: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Characters XML 1.0 does not allow anywhere in a document, even as
/// character references.
fn is_forbidden(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

fn forbidden_chars() -> impl Iterator<Item = char> {
    ('\u{0}'..='\u{1f}')
        .chain(['\u{fffe}', '\u{ffff}'])
        .filter(|&c| is_forbidden(c))
}

// Patterns and replacements share indices: the five specials first, then
// the forbidden characters encoded as `_xHHHH_`
static PATTERNS: Lazy<Vec<String>> = Lazy::new(|| {
    SPECIAL_CHARS
        .iter()
        .map(|s| s.to_string())
        .chain(forbidden_chars().map(String::from))
        .collect()
});

static REPLACEMENTS: Lazy<Vec<String>> = Lazy::new(|| {
    ENTITIES
        .iter()
        .map(|s| s.to_string())
        .chain(forbidden_chars().map(|c| format!("_x{:04X}_", u32::from(c))))
        .collect()
});

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(PATTERNS.iter())
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// Characters XML cannot carry at all (C0 controls other than tab, newline
/// and carriage return, plus U+FFFE and U+FFFF) are written as `_xHHHH_`,
/// the Office escape form.
///
/// # Examples
///
/// ```
/// use deckhand::common::xml::escape_xml;
/// assert_eq!(escape_xml("Summary & Differentiators"), "Summary &amp; Differentiators");
/// assert_eq!(escape_xml("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
/// assert_eq!(escape_xml("Bell\u{7}"), "Bell_x0007_");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_xml_into(&mut out, s);
    out
}

/// Escape `s` and append it to `out` without an intermediate allocation.
///
/// Used by the slide writers, which build whole parts into one buffer.
#[inline]
pub fn escape_xml_into(out: &mut String, s: &str) {
    XML_ESCAPER.replace_all_with(s, out, |mat, _, dst| {
        dst.push_str(&REPLACEMENTS[mat.pattern().as_usize()]);
        true
    });
}

/// Resolve a single named entity (without `&` and `;`) to its character.
pub fn named_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}
