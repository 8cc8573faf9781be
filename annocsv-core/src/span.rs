//! Annotation span parsing
//!
//! Brat standoff files hold one annotation per line, e.g.
//! `T1\tPERSON 0 4;6 11\tJohn Smith`. Only the tab-enclosed
//! `label begin end[;begin end]*` part is used; lines that do not carry it
//! (relations, notes, attributes) are ignored.

use crate::interval::{Interval, OverlapIndex, SortedIntervalIndex};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    /// Annotation label followed by one or more begin/end offset pairs
    static ref ANNOTATION_PATTERN: Regex =
        Regex::new(r"\t(?P<label>.+) (?P<offsets>(?:\d+ \d+;?)+)\t")
            .expect("annotation pattern is valid");
    static ref OFFSET_PAIR: Regex =
        Regex::new(r"(\d+) (\d+)").expect("offset pair pattern is valid");
}

/// Span index used by the document pipeline
pub type SpanIndex = SortedIntervalIndex<String>;

/// An annotation over a range of character offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
    pub label: String,
}

impl Span {
    pub fn new(begin: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            begin,
            end,
            label: label.into(),
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.begin, self.end)
    }
}

/// Parse one annotation line.
///
/// Discontinuous annotations are collapsed to the smallest interval covering
/// all their fragments. Returns `None` for lines without an annotation
/// record, or whose offsets are out of range.
pub fn parse_line(line: &str) -> Option<Span> {
    let captures = ANNOTATION_PATTERN.captures(line)?;
    let label = captures.name("label")?.as_str();
    let offsets = captures.name("offsets")?.as_str();

    let mut bounds: Option<(usize, usize)> = None;
    for pair in OFFSET_PAIR.captures_iter(offsets) {
        let begin: usize = pair[1].parse().ok()?;
        let end: usize = pair[2].parse().ok()?;
        bounds = Some(match bounds {
            Some((min_begin, max_end)) => (min_begin.min(begin), max_end.max(end)),
            None => (begin, end),
        });
    }

    let (begin, end) = bounds?;
    let interval = Interval::try_new(begin, end)?;
    Some(Span::new(interval.begin(), interval.end(), label))
}

/// Parse every line of an annotation file's content.
pub fn parse_spans(content: &str) -> impl Iterator<Item = Span> + '_ {
    content.lines().filter_map(parse_line)
}

/// Build an overlap index from an annotation file's content.
pub fn build_index<I>(content: &str) -> I
where
    I: OverlapIndex<String> + Default,
{
    let mut index = I::default();
    for span in parse_spans(content) {
        index.insert(span.interval(), span.label);
    }
    index
}

/// Load the span index of an annotation file.
///
/// A file that cannot be read yields an empty index: every line of the
/// paired text then falls back to the sentinel label.
pub fn load_index<I>(path: &Path) -> I
where
    I: OverlapIndex<String> + Default,
{
    match fs::read_to_string(path) {
        Ok(content) => build_index(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read annotation file");
            I::default()
        }
    }
}
