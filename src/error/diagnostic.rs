//! Diagnostic formatting for lexical errors
//!
//! Renders a `LexError` as the user-facing report: the file name, the
//! message, and the line number, optionally followed by a snippet of the
//! offending source.

use super::LexError;
use colored::Colorize;

/// Diagnostic information for displaying an error with context
pub struct Diagnostic {
    error: LexError,
    filename: String,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: LexError, filename: impl Into<String>) -> Self {
        Self {
            error,
            filename: filename.into(),
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: LexError, filename: impl Into<String>, source: &str) -> Self {
        Self {
            error,
            filename: filename.into(),
            source: Some(source.to_string()),
        }
    }

    /// Format the report
    ///
    /// The first three lines are the stable contract consumed by anything
    /// scraping stderr:
    ///
    /// ```text
    /// File: "<name>"
    /// [ERROR]: <message>
    ///     at line: <line>
    /// ```
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("File: \"<{}>\"\n", self.filename));
        output.push_str(&format!(
            "{}: {} \n    at line: {}\n",
            "[ERROR]".red().bold(),
            self.error.message(),
            self.error.line()
        ));

        if let Some(ref source) = self.source {
            output.push_str(&self.format_source_context(source));
        }

        output
    }

    /// Show the error line with its neighbors
    fn format_source_context(&self, source: &str) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();
        let line = self.error.line();

        if line == 0 || line > lines.len() {
            return output;
        }

        let line_idx = line - 1;
        let line_num_width = line.to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line, width = line_num_width).blue().bold(),
            lines[line_idx]
        ));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_report_shape() {
        let err = LexError::unexpected_character('@', 1);
        let diag = Diagnostic::new(err, "test.tly");

        let formatted = diag.format();
        assert!(formatted.starts_with("File: \"<test.tly>\"\n"));
        assert!(formatted.contains("unexpected token \"@\""));
        assert!(formatted.contains("    at line: 1"));
    }

    #[test]
    fn test_diagnostic_with_source_context() {
        let source = "1 + 2\n3 @ 4\n5 - 6";
        let err = LexError::unexpected_character('@', 2);
        let diag = Diagnostic::with_source(err, "test.tly", source);

        let formatted = diag.format();
        assert!(formatted.contains("3 @ 4"));
        assert!(formatted.contains("1 + 2"));
        assert!(formatted.contains("5 - 6"));
    }

    #[test]
    fn test_diagnostic_out_of_range_line_omits_context() {
        let err = LexError::unexpected_character('@', 99);
        let diag = Diagnostic::with_source(err, "test.tly", "1 + 2");

        let formatted = diag.format();
        assert!(formatted.contains("at line: 99"));
        assert!(!formatted.contains("1 + 2"));
    }
}
