//! Finding annotation/text pairs under a directory

use crate::config::ProcessOptions;
use crate::document::DocumentPair;
use crate::error::{AnnotationError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An annotation file found during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovered {
    /// Annotation file with content, paired with its text file
    Pair(DocumentPair),
    /// Zero-length annotation file: the document was never annotated
    Empty(PathBuf),
}

impl Discovered {
    pub fn annotation(&self) -> &Path {
        match self {
            Discovered::Pair(pair) => &pair.annotation,
            Discovered::Empty(path) => path,
        }
    }
}

/// Recursively collect annotation files under `base`, in path order.
///
/// Failing to read `base` itself is an error; unreadable subdirectories and
/// annotation files are logged and skipped.
pub fn discover(base: &Path, options: &ProcessOptions) -> Result<Vec<Discovered>> {
    let mut annotations = Vec::new();
    let entries = read_sorted(base).map_err(|e| AnnotationError::io(base, e))?;
    collect(entries, &options.annotation_extension, &mut annotations);

    Ok(annotations
        .into_iter()
        .filter_map(|annotation| classify(annotation, options))
        .collect())
}

fn read_sorted(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}

fn collect(entries: Vec<PathBuf>, extension: &str, found: &mut Vec<PathBuf>) {
    for path in entries {
        let is_real_dir = fs::symlink_metadata(&path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false);

        if is_real_dir {
            match read_sorted(&path) {
                Ok(children) => collect(children, extension, found),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot read directory");
                }
            }
        } else if path.is_file() && has_extension(&path, extension) {
            found.push(path);
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn classify(annotation: PathBuf, options: &ProcessOptions) -> Option<Discovered> {
    let size = match fs::metadata(&annotation) {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::warn!(
                path = %annotation.display(),
                error = %e,
                "cannot read annotation file"
            );
            return None;
        }
    };

    if size == 0 {
        Some(Discovered::Empty(annotation))
    } else {
        Some(Discovered::Pair(DocumentPair::from_annotation(
            &annotation,
            &options.text_extension,
        )))
    }
}
