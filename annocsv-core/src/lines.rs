//! Physical lines of a text file and their character offsets

use crate::error::{AnnotationError, Result};
use crate::interval::Interval;
use std::fs;
use std::path::{Path, PathBuf};

/// Offsets of one physical line, terminator included
pub type LineInterval = Interval;

/// Split `text` into lines, each keeping its terminator.
///
/// `\r\n` and lone `\r` are normalized to `\n` first, so every terminator
/// counts as a single character when computing offsets. A last line without
/// terminator is kept; empty text has no lines.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    };

    normalized.split_inclusive('\n').map(str::to_string).collect()
}

/// Prefix-sum intervals of `lines`, measured in characters.
pub fn line_intervals<S: AsRef<str>>(lines: &[S]) -> Vec<LineInterval> {
    let mut begin = 0;
    lines
        .iter()
        .map(|line| {
            let end = begin + line.as_ref().chars().count();
            let interval = Interval::new(begin, end);
            begin = end;
            interval
        })
        .collect()
}

/// The lines of a text file, ready to be joined with annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLines {
    path: PathBuf,
    lines: Vec<String>,
}

impl TextLines {
    pub fn new(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text),
        }
    }

    /// Read and split a text file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| AnnotationError::io(path, e))?;
        Ok(Self::new(path, &text))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn intervals(&self) -> Vec<LineInterval> {
        line_intervals(&self.lines)
    }
}
