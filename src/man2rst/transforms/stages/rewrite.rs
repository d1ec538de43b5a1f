//! Macro rewrite stage
//!
//! Translates the fixed set of troff macros line by line. See
//! [`macros`](crate::man2rst::macros) for the rule table.

use crate::man2rst::config::ConvertConfig;
use crate::man2rst::document::{Document, LineOrigin};
use crate::man2rst::macros::rewrite_line;
use crate::man2rst::transforms::{Runnable, TransformError};

/// Macro rewrite stage
///
/// # Input
/// - `Document` - raw man page lines
///
/// # Output
/// - `Document` - one line per input line, plus an underline line after
///   every `.TH`/`.SH` heading
pub struct MacroRewrite {
    config: ConvertConfig,
}

impl MacroRewrite {
    pub fn new(config: &ConvertConfig) -> Self {
        MacroRewrite {
            config: config.clone(),
        }
    }
}

impl Default for MacroRewrite {
    fn default() -> Self {
        Self::new(&ConvertConfig::default())
    }
}

impl Runnable<Document, Document> for MacroRewrite {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        let output: Document = input
            .into_lines()
            .into_iter()
            .flat_map(|line| match line.origin {
                LineOrigin::Source(index) => rewrite_line(index, &line.text, &self.config),
                // already converted
                LineOrigin::Underline(_) => vec![line],
            })
            .collect();
        log::debug!("macro rewrite produced {} lines", output.len());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_keeps_line_mapping() {
        let doc = Document::from_source(".TH LS 1\n.SH NAME\nls \\- list\n");
        let result = MacroRewrite::default().run(doc).unwrap();

        assert_eq!(
            result.texts(),
            vec!["LS 1\n", "====\n", "Name\n", "----\n", "ls - list\n"]
        );
        let origins: Vec<_> = result.lines().iter().map(|l| l.origin).collect();
        assert_eq!(
            origins,
            vec![
                LineOrigin::Source(0),
                LineOrigin::Underline(0),
                LineOrigin::Source(1),
                LineOrigin::Underline(1),
                LineOrigin::Source(2),
            ]
        );
        assert_eq!(result.source_line_count(), 3);
    }

    #[test]
    fn test_rewrite_empty_document() {
        let result = MacroRewrite::default().run(Document::default()).unwrap();
        assert!(result.is_empty());
    }
}
