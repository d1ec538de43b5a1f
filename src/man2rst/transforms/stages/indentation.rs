//! Indentation stage
//!
//! Tracks `.RS` (relative start) and `.RE` (relative end) nesting and pads
//! every line to the indent in effect when the line is reached. The indent
//! is recorded *before* a line's own directive is applied, so `.RS`/`.RE`
//! lines themselves sit at the outer level.
//!
//! Padding is a minimum width: spaces are appended until the line is as wide
//! as its recorded indent, and longer lines are left untouched.

use crate::man2rst::config::ConvertConfig;
use crate::man2rst::document::{Document, Line, LineOrigin};
use crate::man2rst::transforms::{Runnable, TransformError};

const OPEN: &str = ".RS";
const CLOSE: &str = ".RE";
const OPEN_AT_EOL: &str = ".RS\n";
const CLOSE_AT_EOL: &str = ".RE\n";

/// Nesting change requested by a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Open,
    Close,
}

/// Detect a directive and return the line text with the directive replaced.
fn take_directive(text: &str) -> Option<(Directive, String)> {
    if text.starts_with(OPEN) {
        Some((Directive::Open, "\n\n".to_string()))
    } else if text.contains(OPEN_AT_EOL) {
        Some((Directive::Open, text.replace(OPEN_AT_EOL, "\n\n")))
    } else if text.starts_with(CLOSE) {
        Some((Directive::Close, "\n".to_string()))
    } else if text.contains(CLOSE_AT_EOL) {
        Some((Directive::Close, text.replace(CLOSE_AT_EOL, "\n")))
    } else {
        None
    }
}

/// Append spaces until `text` is `width` characters wide
fn pad_to(text: &mut String, width: usize) {
    let current = text.chars().count();
    if current < width {
        text.extend(std::iter::repeat(' ').take(width - current));
    }
}

/// 1-based input line number, for diagnostics
fn line_number(line: &Line) -> usize {
    match line.origin {
        LineOrigin::Source(index) | LineOrigin::Underline(index) => index + 1,
    }
}

/// Indentation stage
///
/// # Input
/// - `Document` - lines after marker cleanup, still containing `.RS`/`.RE`
///
/// # Output
/// - `Document` - directives blanked, lines padded to their nesting level
pub struct Indentation {
    step: i64,
    strict: bool,
}

impl Indentation {
    pub fn new(config: &ConvertConfig) -> Self {
        Indentation {
            step: i64::try_from(config.indent_width).unwrap_or(i64::MAX),
            strict: config.strict_nesting,
        }
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::new(&ConvertConfig::default())
    }
}

impl Runnable<Document, Document> for Indentation {
    fn run(&self, mut input: Document) -> Result<Document, TransformError> {
        let mut indent: i64 = 0;

        for line in input.lines_mut() {
            let recorded = indent;

            if let Some((directive, text)) = take_directive(&line.text) {
                line.text = text;
                match directive {
                    Directive::Open => indent = indent.saturating_add(self.step),
                    Directive::Close => {
                        indent = indent.saturating_sub(self.step);
                        if indent < 0 {
                            let message = format!(
                                "line {}: {} closes more levels than were opened",
                                line_number(line),
                                CLOSE
                            );
                            if self.strict {
                                return Err(TransformError::StageFailed {
                                    stage: "Indentation".to_string(),
                                    message,
                                });
                            }
                            log::warn!("{}", message);
                        }
                    }
                }
            }

            // negative levels pad nothing
            let width = usize::try_from(recorded).unwrap_or(0);
            pad_to(&mut line.text, width);
        }

        if indent > 0 {
            log::warn!(
                "{} level(s) opened with {} were never closed",
                indent / self.step.max(1),
                OPEN
            );
        }
        log::debug!("indentation finished at level {}", indent);
        Ok(input)
    }
}
