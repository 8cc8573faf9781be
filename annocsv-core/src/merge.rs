//! Rebuilding logical lines from the exported virtual lines
//!
//! The annotation tool wraps long lines: a logical line of the original
//! document becomes one or more consecutive virtual lines, and logical lines
//! are separated by a blank virtual line. The last lines of the export are a
//! trailer carrying the document difficulty rather than content.

use crate::document::{LabelSet, LogicalLine, VirtualLine};
use crate::error::{AnnotationError, Result};
use std::path::Path;

/// Read the document difficulty from the second-to-last virtual line.
///
/// Exactly one label is expected there.
pub fn extract_difficulty(lines: &[VirtualLine], path: &Path) -> Result<String> {
    let position = lines
        .len()
        .checked_sub(2)
        .ok_or_else(|| AnnotationError::MissingDifficulty {
            path: path.to_path_buf(),
            line_count: lines.len(),
        })?;

    let labels = &lines[position].labels;
    let mut iter = labels.iter();
    match (iter.next(), iter.next()) {
        (Some(label), None) => Ok(label.clone()),
        _ => Err(AnnotationError::AmbiguousDifficulty {
            path: path.to_path_buf(),
            labels: labels.iter().cloned().collect(),
        }),
    }
}

/// Drop the trailer: keep lines whose index is below `len - trailer_lines`.
///
/// Indices are 1-based, so this also drops the blank line just before the
/// trailer. Fewer than `trailer_lines + 1` lines leave nothing.
pub fn truncate_trailer(mut lines: Vec<VirtualLine>, trailer_lines: usize) -> Vec<VirtualLine> {
    let limit = lines.len().saturating_sub(trailer_lines);
    lines.retain(|line| line.index < limit);
    lines
}

/// Merge virtual lines into logical lines.
///
/// A blank virtual line closes the logical line being built; text after the
/// last blank line is not emitted. The sentinel is dropped from a merged
/// label set holding anything else, since a partly annotated line counts as
/// annotated.
pub fn merge_lines(lines: &[VirtualLine], no_type: &str) -> Vec<LogicalLine> {
    let mut merger = Merger::new(no_type);
    for line in lines {
        merger.push(line);
    }
    merger.finish()
}

struct Merger<'a> {
    no_type: &'a str,
    labels: LabelSet,
    fragments: Vec<&'a str>,
    merged: Vec<LogicalLine>,
}

impl<'a> Merger<'a> {
    fn new(no_type: &'a str) -> Self {
        Self {
            no_type,
            labels: LabelSet::new(),
            fragments: Vec::new(),
            merged: Vec::new(),
        }
    }

    fn push(&mut self, line: &'a VirtualLine) {
        if line.is_delimiter() {
            if self.fragments.is_empty() {
                // consecutive blanks: an empty logical line
                self.labels.extend(line.labels.iter().cloned());
            }
            self.close();
        } else {
            self.labels.extend(line.labels.iter().cloned());
            self.fragments.push(&line.text);
        }
    }

    fn close(&mut self) {
        let mut labels = std::mem::take(&mut self.labels);
        if labels.len() > 1 {
            labels.remove(self.no_type);
        }
        let text = self.fragments.join(" ");
        self.fragments.clear();

        let index = self.merged.len() + 1;
        self.merged.push(LogicalLine::new(index, labels, text));
    }

    // fragments left open at the end were never closed by a blank line
    fn finish(self) -> Vec<LogicalLine> {
        self.merged
    }
}
