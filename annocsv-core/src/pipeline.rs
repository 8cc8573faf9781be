//! Processing documents into a report
//!
//! Each document pair goes through the same steps: load the span index,
//! split the text into lines, join lines with spans, read the difficulty,
//! drop the trailer and merge virtual lines. The run-wide [`Report`] is a
//! plain value passed into and returned from each step.
//!
//! # Example
//!
//! ```rust,no_run
//! use annocsv::{run, write_report_file, ProcessOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run(Path::new("data"), &ProcessOptions::default())?;
//! println!("{}", report.summary());
//! write_report_file(Path::new("annotations.csv"), &report)?;
//! # Ok(())
//! # }
//! ```

use crate::config::ProcessOptions;
use crate::discovery::{discover, Discovered};
use crate::document::{DocumentPair, DocumentRecord};
use crate::error::{AnnotationError, Result};
use crate::interval::OverlapIndex;
use crate::join::annotate_lines;
use crate::lines::TextLines;
use crate::merge::{extract_difficulty, merge_lines, truncate_trailer};
use crate::span::{load_index, SpanIndex};
use std::fmt;
use std::path::{Path, PathBuf};

/// Run one document pair through the whole pipeline.
pub fn process_document(pair: &DocumentPair, options: &ProcessOptions) -> Result<DocumentRecord> {
    let index: SpanIndex = load_index(&pair.annotation);
    let text = TextLines::load(&pair.text)?;

    let virtual_lines = annotate_lines(text.lines(), &text.intervals(), &index, &options.no_type);
    let difficulty = extract_difficulty(&virtual_lines, &pair.text)?;
    let content = truncate_trailer(virtual_lines, options.trailer_lines);
    let lines = merge_lines(&content, &options.no_type);

    tracing::debug!(
        path = %pair.text.display(),
        spans = index.len(),
        raw_lines = text.len(),
        lines = lines.len(),
        %difficulty,
        "document processed"
    );

    Ok(DocumentRecord::new(difficulty, lines))
}

/// Counters for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Annotation files with content
    pub processed: usize,
    /// Empty annotation files
    pub skipped: usize,
    /// Processed documents whose record could not be built
    pub failed: usize,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.processed - self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} annotation file(s) processed successfully; {} skipped (empty)",
            self.succeeded(),
            self.skipped
        )?;
        if self.failed > 0 {
            write!(f, "; {} failed", self.failed)?;
        }
        write!(f, ".")
    }
}

/// Outcome of one document, returned so callers can report progress
#[derive(Debug)]
pub enum DocumentOutcome {
    Processed,
    Failed(AnnotationError),
}

impl DocumentOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, DocumentOutcome::Processed)
    }
}

/// Records of every document seen during a run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    documents: Vec<(PathBuf, DocumentRecord)>,
    summary: RunSummary,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process `pair` and store its record under the text file path.
    ///
    /// A failure is logged and leaves an empty record behind, so the
    /// document contributes no rows but the run goes on.
    pub fn process(
        mut self,
        pair: &DocumentPair,
        options: &ProcessOptions,
    ) -> (Self, DocumentOutcome) {
        self.summary.processed += 1;

        let outcome = match process_document(pair, options) {
            Ok(record) => {
                self.insert(pair.text.clone(), record);
                DocumentOutcome::Processed
            }
            Err(e) => {
                tracing::warn!(path = %pair.text.display(), error = %e, "document skipped");
                self.summary.failed += 1;
                self.insert(pair.text.clone(), DocumentRecord::empty(&options.no_type));
                DocumentOutcome::Failed(e)
            }
        };

        (self, outcome)
    }

    /// Count an annotation file left empty by the annotators
    pub fn skip_empty(mut self, annotation: &Path) -> Self {
        tracing::debug!(path = %annotation.display(), "empty annotation file skipped");
        self.summary.skipped += 1;
        self
    }

    /// Store a record, replacing an earlier one for the same document
    pub fn insert(&mut self, document: PathBuf, record: DocumentRecord) {
        match self.documents.iter_mut().find(|(path, _)| *path == document) {
            Some((_, existing)) => *existing = record,
            None => self.documents.push((document, record)),
        }
    }

    pub fn get(&self, document: &Path) -> Option<&DocumentRecord> {
        self.documents
            .iter()
            .find(|(path, _)| path == document)
            .map(|(_, record)| record)
    }

    pub fn documents(&self) -> impl Iterator<Item = (&Path, &DocumentRecord)> {
        self.documents
            .iter()
            .map(|(path, record)| (path.as_path(), record))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total number of rows the report will write
    pub fn row_count(&self) -> usize {
        self.documents.iter().map(|(_, record)| record.lines.len()).sum()
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}

/// Discover every document under `base` and process it.
pub fn run(base: &Path, options: &ProcessOptions) -> Result<Report> {
    let found = discover(base, options)?;
    Ok(process_all(&found, options))
}

/// Fold discovered files into a report.
pub fn process_all(found: &[Discovered], options: &ProcessOptions) -> Report {
    found.iter().fold(Report::new(), |report, item| match item {
        Discovered::Empty(annotation) => report.skip_empty(annotation),
        Discovered::Pair(pair) => report.process(pair, options).0,
    })
}
