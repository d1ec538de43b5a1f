//! Line-oriented document model
//!
//! A [`Document`] is the ordered list of lines that flows through the
//! conversion passes. Every line remembers where it came from: either an
//! input line ([`LineOrigin::Source`]) or a heading underline synthesized
//! after one ([`LineOrigin::Underline`]). Passes may rewrite, blank or pad a
//! line, but never split or drop one, so the source lines of a converted
//! document always correspond one-to-one with the input.

/// Where a line of the document came from (0-based input line number)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrigin {
    Source(usize),
    Underline(usize),
}

/// A single line of text, including its `\n` terminator when it has one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub origin: LineOrigin,
}

impl Line {
    pub fn source(index: usize, text: impl Into<String>) -> Self {
        Line {
            text: text.into(),
            origin: LineOrigin::Source(index),
        }
    }

    pub fn underline(index: usize, text: impl Into<String>) -> Self {
        Line {
            text: text.into(),
            origin: LineOrigin::Underline(index),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.origin, LineOrigin::Underline(_))
    }
}

/// Ordered lines of a man page (before conversion) or of rst output (after)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    pub fn new(lines: Vec<Line>) -> Self {
        Document { lines }
    }

    /// Split source text into lines, keeping each `\n` with its line.
    ///
    /// A final line without terminator is kept as is; empty input gives an
    /// empty document.
    pub fn from_source(source: &str) -> Self {
        let lines = source
            .split_inclusive('\n')
            .enumerate()
            .map(|(index, text)| Line::source(index, text))
            .collect();
        Document { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines that stem from input lines (underlines excluded)
    pub fn source_line_count(&self) -> usize {
        self.lines.iter().filter(|line| !line.is_synthetic()).count()
    }

    /// Line texts, in order
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    /// Concatenate all lines into the final text
    pub fn render(&self) -> String {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

impl FromIterator<Line> for Document {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Document::new(iter.into_iter().collect())
    }
}
