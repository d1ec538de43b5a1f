//! Troff macro rules
//!
//! Recognized macros are declared as an ordered table of regex patterns. A line
//! is matched against the patterns in declaration order and the first match
//! decides how it is rewritten:
//!
//! 1. comment     `.\"`  → `..` (rst comment)
//! 2. title       `.TH ` → title line + `=` underline
//! 3. section     `.SH ` → capitalized heading + `-` underline
//! 4. bold        `.B `  → `**text**`
//! 5. italic      `.I `  → `*text*`
//! 6. tagged para `.IP ` → `*text*`
//! 7. paragraph   `.PP`  → remainder of the line
//!
//! Lines matching none of the patterns pass through unchanged. `.RS`/`.RE` are
//! not handled here: they depend on state across lines and belong to the
//! indentation pass.

use crate::man2rst::config::ConvertConfig;
use crate::man2rst::document::Line;
use once_cell::sync::Lazy;
use regex::Regex;

/// The macros recognized by the rewrite pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroKind {
    Comment,
    Title,
    Section,
    Bold,
    Italic,
    TaggedParagraph,
    Paragraph,
}

impl MacroKind {
    pub fn name(&self) -> &'static str {
        match self {
            MacroKind::Comment => "comment",
            MacroKind::Title => "title",
            MacroKind::Section => "section",
            MacroKind::Bold => "bold",
            MacroKind::Italic => "italic",
            MacroKind::TaggedParagraph => "tagged-paragraph",
            MacroKind::Paragraph => "paragraph",
        }
    }
}

/// Macro prefixes as regex rules. Order matters: first match wins.
const MACRO_PATTERNS: &[(MacroKind, &str)] = &[
    (MacroKind::Comment, r#"^\.\\""#),
    (MacroKind::Title, r"^\.TH "),
    (MacroKind::Section, r"^\.SH "),
    (MacroKind::Bold, r"^\.B "),
    (MacroKind::Italic, r"^\.I "),
    (MacroKind::TaggedParagraph, r"^\.IP "),
    (MacroKind::Paragraph, r"^\.PP"),
];

static MACRO_RULES: Lazy<Vec<(MacroKind, Regex)>> = Lazy::new(|| {
    MACRO_PATTERNS
        .iter()
        .map(|(kind, pattern)| (*kind, Regex::new(pattern).unwrap()))
        .collect()
});

/// A line split into its macro and the text following the macro prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroMatch<'a> {
    pub kind: MacroKind,
    pub rest: &'a str,
}

/// Find the first rule matching `line`
pub fn classify(line: &str) -> Option<MacroMatch<'_>> {
    MACRO_RULES.iter().find_map(|(kind, regex)| {
        regex.find(line).map(|m| MacroMatch {
            kind: *kind,
            rest: &line[m.end()..],
        })
    })
}

/// Replace `\-` escapes with `-` and fold `\n\r` into `\n`
pub fn normalize_escapes(line: &str) -> String {
    line.replace("\\-", "-").replace("\n\r", "\n")
}

/// First character uppercased, the rest lowercased
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Underline for a heading line: one `marker` per character of the heading,
/// not counting its terminator.
pub fn underline_for(heading: &str, marker: char) -> String {
    let width = heading.chars().count().saturating_sub(1);
    let mut underline: String = std::iter::repeat(marker).take(width).collect();
    underline.push('\n');
    underline
}

/// Inline markup: newlines removed, trailing whitespace stripped, wrapped in
/// `marker`, terminated with `\n`.
fn wrap_inline(rest: &str, marker: &str) -> String {
    let body = rest.replace('\n', "");
    format!("{marker}{}{marker}\n", body.trim_end())
}

/// Rewrite input line `index` into one line, or two for headings.
pub fn rewrite_line(index: usize, raw: &str, config: &ConvertConfig) -> Vec<Line> {
    let text = normalize_escapes(raw);
    let Some(found) = classify(&text) else {
        return vec![Line::source(index, text)];
    };

    log::trace!("line {}: {} macro", index + 1, found.kind.name());
    match found.kind {
        MacroKind::Comment => vec![Line::source(index, format!("..{}", found.rest))],
        MacroKind::Title => {
            let underline = underline_for(found.rest, config.title_underline);
            vec![
                Line::source(index, found.rest),
                Line::underline(index, underline),
            ]
        }
        MacroKind::Section => {
            let heading = capitalize(found.rest);
            let underline = underline_for(&heading, config.section_underline);
            vec![Line::source(index, heading), Line::underline(index, underline)]
        }
        MacroKind::Bold => vec![Line::source(index, wrap_inline(found.rest, "**"))],
        MacroKind::Italic | MacroKind::TaggedParagraph => {
            vec![Line::source(index, wrap_inline(found.rest, "*"))]
        }
        MacroKind::Paragraph => vec![Line::source(index, wrap_inline(found.rest, ""))],
    }
}
