//! Options controlling how annotation/text pairs are processed

/// Label assigned to lines no annotation overlaps
pub const DEFAULT_NO_TYPE: &str = "n_a";

/// Number of trailing text lines reserved for document metadata
pub const DEFAULT_TRAILER_LINES: usize = 5;

/// Extension of annotation files
pub const DEFAULT_ANNOTATION_EXTENSION: &str = "ann";

/// Extension of the text files paired with annotation files
pub const DEFAULT_TEXT_EXTENSION: &str = "txt";

/// Options for processing a set of documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Sentinel label for unannotated lines
    pub no_type: String,
    /// Trailing lines holding metadata rather than content
    pub trailer_lines: usize,
    /// Annotation file extension, without the dot
    pub annotation_extension: String,
    /// Text file extension, without the dot
    pub text_extension: String,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            no_type: DEFAULT_NO_TYPE.to_string(),
            trailer_lines: DEFAULT_TRAILER_LINES,
            annotation_extension: DEFAULT_ANNOTATION_EXTENSION.to_string(),
            text_extension: DEFAULT_TEXT_EXTENSION.to_string(),
        }
    }
}

impl ProcessOptions {
    /// Set the sentinel label
    pub fn with_no_type(mut self, no_type: impl Into<String>) -> Self {
        self.no_type = no_type.into();
        self
    }

    /// Set the number of trailer lines
    pub fn with_trailer_lines(mut self, lines: usize) -> Self {
        self.trailer_lines = lines;
        self
    }

    /// Set the annotation file extension
    pub fn with_annotation_extension(mut self, extension: impl Into<String>) -> Self {
        self.annotation_extension = trim_dot(extension.into());
        self
    }

    /// Set the text file extension
    pub fn with_text_extension(mut self, extension: impl Into<String>) -> Self {
        self.text_extension = trim_dot(extension.into());
        self
    }
}

fn trim_dot(extension: String) -> String {
    match extension.strip_prefix('.') {
        Some(stripped) => stripped.to_string(),
        None => extension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ProcessOptions::default();
        assert_eq!(options.no_type, "n_a");
        assert_eq!(options.trailer_lines, 5);
        assert_eq!(options.annotation_extension, "ann");
        assert_eq!(options.text_extension, "txt");
    }

    #[test]
    fn test_builder_methods() {
        let options = ProcessOptions::default()
            .with_no_type("none")
            .with_trailer_lines(3)
            .with_annotation_extension(".a1")
            .with_text_extension("text");

        assert_eq!(options.no_type, "none");
        assert_eq!(options.trailer_lines, 3);
        assert_eq!(options.annotation_extension, "a1");
        assert_eq!(options.text_extension, "text");
    }
}
