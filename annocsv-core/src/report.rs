//! CSV output
//!
//! One header row, then one row per logical line:
//! `filename,line_num,types,annotation_difficulty,text`. Every field except
//! the line number is quoted, whatever its content, so a text line reading
//! `42` stays a string for readers that convert unquoted fields to numbers.

use crate::error::{AnnotationError, Result};
use crate::pipeline::Report;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header of the CSV file
pub const HEADER: [&str; 5] = [
    "filename",
    "line_num",
    "types",
    "annotation_difficulty",
    "text",
];

/// A string field written between double quotes, inner quotes doubled
struct Quoted<'a>(&'a str);

impl Serialize for Quoted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&quote(self.0))
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[derive(Serialize)]
struct Row<'a> {
    filename: Quoted<'a>,
    line_num: usize,
    types: Quoted<'a>,
    annotation_difficulty: Quoted<'a>,
    text: Quoted<'a>,
}

/// Write `report` as CSV to `writer`, returning the number of data rows.
pub fn write_report<W: Write>(writer: W, report: &Report) -> Result<usize> {
    // quoting is applied per field by `Quoted`
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    csv.write_record(HEADER.iter().map(|name| quote(name)))?;

    let mut rows = 0;
    for (document, record) in report.documents() {
        let filename = document.to_string_lossy();
        for line in &record.lines {
            let types = line.joined_labels();
            csv.serialize(Row {
                filename: Quoted(&filename),
                line_num: line.index,
                types: Quoted(&types),
                annotation_difficulty: Quoted(&record.difficulty),
                text: Quoted(&line.text),
            })?;
            rows += 1;
        }
    }

    csv.flush().map_err(csv::Error::from)?;
    Ok(rows)
}

/// Create (or truncate) `path` and write `report` into it.
pub fn write_report_file(path: &Path, report: &Report) -> Result<usize> {
    let file = File::create(path).map_err(|e| AnnotationError::io(path, e))?;
    let rows = write_report(file, report)?;
    tracing::info!(path = %path.display(), rows, "report written");
    Ok(rows)
}
