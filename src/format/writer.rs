//! Output writer with indentation tracking
//!
//! Indentation is written lazily, right before the first character of a line, so empty lines inside block patterns
//! never carry trailing spaces.

use super::config::FormatConfig;

/// Writer that tracks indentation and builds serialized output
pub struct FormatWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: FormatConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl FormatWriter {
    /// Create a new format writer with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the serialized output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn indent_columns(&self) -> usize {
        self.indent_level * self.config.indent_width
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent = " ".repeat(self.indent_columns());
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent).
    ///
    /// Embedded newlines start new lines at the current indentation.
    pub fn write(&mut self, s: &str) {
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if !line.is_empty() {
                self.write_indent();
                self.output.push_str(line);
            }
        }
    }

    /// Write `marker` in the last column of the indentation, then continue the line.
    ///
    /// Used for the `*` of default variants. Outside of a line start this is a plain write.
    pub fn write_marked(&mut self, marker: char) {
        if self.at_line_start {
            let columns = self.indent_columns().saturating_sub(1);
            self.output.push_str(&" ".repeat(columns));
            self.at_line_start = false;
        }
        self.output.push(marker);
    }

    /// Write a string exactly as given, without indentation.
    pub fn write_raw(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.output.push_str(s);
        self.at_line_start = s.ends_with('\n');
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Get the configuration
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}
