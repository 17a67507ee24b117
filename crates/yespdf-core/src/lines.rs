//! Line splitting over extracted text.
//!
//! Page breaks in extracted text are form feeds, which are line terminators
//! here, so a multi-page document splits into the lines of every page.

/// Characters that end a line. CR followed by LF counts as one terminator.
const LINE_TERMINATORS: &[char] = &[
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// How [`line_sequence`](crate::DocumentFacade::line_sequence) shapes its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineMode {
    /// Lines only.
    #[default]
    Plain,
    /// Lines paired with their zero-based index.
    Indexed,
}

/// Lines of a document's text, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSequence {
    Lines(Vec<String>),
    IndexedLines(Vec<(usize, String)>),
}

impl LineSequence {
    /// Build a sequence from `text` in the requested shape.
    pub fn from_text(text: &str, mode: LineMode) -> Self {
        let lines = split_lines(text);
        match mode {
            LineMode::Plain => Self::Lines(lines.into_iter().map(str::to_string).collect()),
            LineMode::Indexed => Self::IndexedLines(
                lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| (i, line.to_string()))
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Lines(lines) => lines.len(),
            Self::IndexedLines(lines) => lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the indices, keeping the lines.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Lines(lines) => lines,
            Self::IndexedLines(lines) => lines.into_iter().map(|(_, line)| line).collect(),
        }
    }

    /// Pair every line with its index. Indices already present are kept.
    pub fn into_indexed(self) -> Vec<(usize, String)> {
        match self {
            Self::Lines(lines) => lines.into_iter().enumerate().collect(),
            Self::IndexedLines(lines) => lines,
        }
    }
}

/// Split `text` into lines, dropping the terminators.
///
/// A terminator at the very end of `text` does not start a new, empty line,
/// and empty input yields no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !LINE_TERMINATORS.contains(&c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r'
            && let Some(&(j, '\n')) = chars.peek()
        {
            chars.next();
            start = j + 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
