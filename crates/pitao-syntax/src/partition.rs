//! Splitting source text into code and opaque spans.
//!
//! String literals and comments are opaque: keyword substitution must never
//! touch them. Everything between them is code. The split is a single
//! left-to-right scan with one alternation pattern, so it runs in linear time
//! and keeps no nesting state.
//!
//! ```text
//! x = "se isso"  # se comentário
//! └──┘└───────┘└┘└─────────────┘
//! code  opaque code   opaque
//! ```
//!
//! Alternatives are tried leftmost-first in this order: `"""…"""`, `'''…'''`,
//! `"…"`, `'…'`, `#…`. Triple quotes come first so `"""` is never read as an
//! empty string followed by a stray quote.
//!
//! A string with no closing quote does not match at all; its opening quote
//! stays in a code span and the scan resumes after it. A comment on the last
//! line runs to end of text.

use regex::Regex;
use serde::Serialize;
use std::ops::Range;
use std::sync::OnceLock;

const OPAQUE_PATTERN: &str = concat!(
    r#"(?m)"""[\s\S]*?""""#,
    r"|'''[\s\S]*?'''",
    r#"|"(?:[^"\\]|\\.)*""#,
    r"|'(?:[^'\\]|\\.)*'",
    r"|#.*$",
);

fn opaque_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(OPAQUE_PATTERN).expect("opaque span pattern compiles"))
}

/// What an opaque span contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpaqueKind {
    /// `"""…"""`
    TripleDouble,
    /// `'''…'''`
    TripleSingle,
    /// `"…"`
    Double,
    /// `'…'`
    Single,
    /// `#` to end of line
    Comment,
}

impl OpaqueKind {
    /// Classify a match of [`OPAQUE_PATTERN`].
    ///
    /// A plain double-quoted match ends at its second quote, so only the
    /// triple-quoted alternative can produce text starting with `"""`.
    fn of_match(text: &str) -> Self {
        if text.starts_with(r#"""""#) {
            OpaqueKind::TripleDouble
        } else if text.starts_with("'''") {
            OpaqueKind::TripleSingle
        } else if text.starts_with('"') {
            OpaqueKind::Double
        } else if text.starts_with('\'') {
            OpaqueKind::Single
        } else {
            OpaqueKind::Comment
        }
    }
}

/// Tag of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Eligible for keyword substitution.
    Code,
    /// Preserved verbatim.
    Opaque(OpaqueKind),
}

/// A non-empty span of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    /// Byte offset of `text` in the source.
    pub start: usize,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_code(&self) -> bool {
        self.kind == SegmentKind::Code
    }

    fn code(source: &'a str, range: Range<usize>) -> Self {
        Self {
            kind: SegmentKind::Code,
            start: range.start,
            text: &source[range],
        }
    }
}

/// Lazy iterator over the segments of a source text.
///
/// Yields segments in source order; every byte belongs to exactly one of
/// them and no segment is empty.
pub struct Segments<'a> {
    source: &'a str,
    matches: regex::Matches<'static, 'a>,
    cursor: usize,
    pending: Option<Segment<'a>>,
}

impl<'a> Segments<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            matches: opaque_pattern().find_iter(source),
            cursor: 0,
            pending: None,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        let Some(m) = self.matches.next() else {
            if self.cursor < self.source.len() {
                let gap = self.cursor..self.source.len();
                self.cursor = self.source.len();
                return Some(Segment::code(self.source, gap));
            }
            return None;
        };

        let opaque = Segment {
            kind: SegmentKind::Opaque(OpaqueKind::of_match(m.as_str())),
            start: m.start(),
            text: m.as_str(),
        };
        let gap = self.cursor..m.start();
        self.cursor = m.end();

        if gap.is_empty() {
            Some(opaque)
        } else {
            self.pending = Some(opaque);
            Some(Segment::code(self.source, gap))
        }
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Partition `source` into code and opaque segments.
pub fn partition(source: &str) -> Vec<Segment<'_>> {
    Segments::new(source).collect()
}
