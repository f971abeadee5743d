//! Serializer configuration
//!
//! The canonical Fluent layout is fixed (4-space indentation, one entry per line), so the knobs here only decide
//! what gets emitted, not how it looks.

/// Options accepted by [`serialize_with_options`](super::serialize_with_options).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Emit [`Junk`](ftl_syntax::ast::Junk) entries verbatim instead of dropping them
    pub with_junk: bool,
}

impl SerializeOptions {
    /// Create options with default settings (junk is dropped)
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or drop junk entries
    pub fn with_junk(mut self, with_junk: bool) -> Self {
        self.with_junk = with_junk;
        self
    }
}

/// Writer configuration
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces per indentation level, fixed at 4 by the format
    pub(crate) indent_width: usize,
    /// Emit junk entries verbatim
    pub with_junk: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            with_junk: false,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or drop junk entries
    pub fn with_junk(mut self, with_junk: bool) -> Self {
        self.with_junk = with_junk;
        self
    }
}

impl From<SerializeOptions> for FormatConfig {
    fn from(options: SerializeOptions) -> Self {
        FormatConfig::new().with_junk(options.with_junk)
    }
}
