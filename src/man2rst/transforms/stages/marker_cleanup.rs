//! Trailing marker cleanup stage
//!
//! A line ending in a closing emphasis marker (`*\n`, as produced for `.B`,
//! `.I` and `.IP`) is joined with the following line by swapping the newline
//! for a space, so the marker is not left alone at the end of a line.

use crate::man2rst::document::Document;
use crate::man2rst::transforms::{Runnable, TransformError};

const MARKER_AT_EOL: &str = "*\n";
const MARKER_JOINED: &str = "* ";

/// Trailing marker cleanup stage
///
/// # Input
/// - `Document` - lines after macro rewriting
///
/// # Output
/// - `Document` - same lines, with `*\n` endings turned into `* `
pub struct MarkerCleanup;

impl MarkerCleanup {
    pub fn new() -> Self {
        MarkerCleanup
    }
}

impl Default for MarkerCleanup {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Document, Document> for MarkerCleanup {
    fn run(&self, mut input: Document) -> Result<Document, TransformError> {
        let mut joined = 0;
        for line in input.lines_mut() {
            if let Some(body) = line.text.strip_suffix(MARKER_AT_EOL) {
                line.text = format!("{}{}", body, MARKER_JOINED);
                joined += 1;
            }
        }
        log::debug!("marker cleanup joined {} lines", joined);
        Ok(input)
    }
}
