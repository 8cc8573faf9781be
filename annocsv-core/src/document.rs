//! Per-document records produced by the join and merge steps

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Labels attached to a line
pub type LabelSet = BTreeSet<String>;

/// Build a label set from string slices
pub fn label_set<I, S>(labels: I) -> LabelSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels.into_iter().map(Into::into).collect()
}

/// One physical line of the exported text, possibly a wrapped fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualLine {
    /// 1-based position in the file
    pub index: usize,
    pub labels: LabelSet,
    /// Content without trailing whitespace
    pub text: String,
}

impl VirtualLine {
    pub fn new(index: usize, labels: LabelSet, text: impl Into<String>) -> Self {
        Self {
            index,
            labels,
            text: text.into(),
        }
    }

    /// Blank lines delimit logical lines
    pub fn is_delimiter(&self) -> bool {
        self.text.is_empty()
    }
}

/// A line of the original document, rebuilt from virtual lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based position among logical lines
    pub index: usize,
    pub labels: LabelSet,
    pub text: String,
}

impl LogicalLine {
    pub fn new(index: usize, labels: LabelSet, text: impl Into<String>) -> Self {
        Self {
            index,
            labels,
            text: text.into(),
        }
    }

    /// Labels joined with spaces, as written in the report
    pub fn joined_labels(&self) -> String {
        self.labels
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything the report holds about one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub difficulty: String,
    pub lines: Vec<LogicalLine>,
}

impl DocumentRecord {
    pub fn new(difficulty: impl Into<String>, lines: Vec<LogicalLine>) -> Self {
        Self {
            difficulty: difficulty.into(),
            lines,
        }
    }

    /// Record kept for a document that could not be processed
    pub fn empty(no_type: &str) -> Self {
        Self::new(no_type, Vec::new())
    }
}

/// An annotation file and the text file it annotates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPair {
    pub annotation: PathBuf,
    pub text: PathBuf,
}

impl DocumentPair {
    pub fn new(annotation: impl Into<PathBuf>, text: impl Into<PathBuf>) -> Self {
        Self {
            annotation: annotation.into(),
            text: text.into(),
        }
    }

    /// Pair an annotation file with the sibling sharing its stem
    pub fn from_annotation(annotation: &Path, text_extension: &str) -> Self {
        Self::new(annotation, annotation.with_extension(text_extension))
    }
}
