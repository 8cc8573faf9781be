//! # annocsv
//!
//! Turn brat standoff annotations and their source text into a per-line CSV
//! report.
//!
//! ## Features
//!
//! - **Span parsing**: reads `label begin end[;begin end]*` records from
//!   `.ann` files, collapsing discontinuous annotations
//! - **Overlap join**: labels every physical line of the `.txt` file with the
//!   annotations overlapping its character offsets
//! - **Line reconstruction**: merges wrapped virtual lines back into the
//!   logical lines of the original document
//! - **Document difficulty**: reads the difficulty label from the trailer and
//!   keeps the trailer out of the report
//! - **CSV report**: one row per logical line, non-numeric fields quoted
//!
//! ## Quick Start
//!
//! ```rust
//! use annocsv::{merge_lines, annotate_lines, line_intervals, split_lines, span, SpanIndex};
//!
//! let index: SpanIndex = span::build_index("T1\tPERSON 0 4\tJohn\n");
//! let lines = split_lines("John\nSmith\n\nsaid hi\n\n");
//! let virtual_lines = annotate_lines(&lines, &line_intervals(&lines), &index, "n_a");
//! let logical = merge_lines(&virtual_lines, "n_a");
//!
//! assert_eq!(logical[0].text, "John Smith");
//! assert_eq!(logical[0].joined_labels(), "PERSON");
//! assert_eq!(logical[1].joined_labels(), "n_a");
//! ```
//!
//! ## Modules
//!
//! - [`span`] - Annotation parsing and span index
//! - [`interval`] - Intervals and the overlap index capability
//! - [`lines`] - Physical lines and their offsets
//! - [`join`] - Line/span overlap join
//! - [`merge`] - Difficulty, trailer and logical lines
//! - [`pipeline`] - Per-document processing and the run report
//! - [`discovery`] - Directory traversal
//! - [`report`] - CSV output

pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod interval;
pub mod join;
pub mod lines;
pub mod merge;
pub mod pipeline;
pub mod report;
pub mod span;

pub use config::ProcessOptions;
pub use discovery::{discover, Discovered};
pub use document::{label_set, DocumentPair, DocumentRecord, LabelSet, LogicalLine, VirtualLine};
pub use error::{AnnotationError, Result};
pub use interval::{Interval, OverlapIndex, SortedIntervalIndex};
pub use join::{annotate_lines, labels_for};
pub use lines::{line_intervals, split_lines, LineInterval, TextLines};
pub use merge::{extract_difficulty, merge_lines, truncate_trailer};
pub use pipeline::{process_all, process_document, run, DocumentOutcome, Report, RunSummary};
pub use report::{write_report, write_report_file};
pub use span::{parse_line, Span, SpanIndex};

/// Current version of annocsv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
