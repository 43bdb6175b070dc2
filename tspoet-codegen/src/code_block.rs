//! Immutable formatted-text fragments.

use std::fmt;

/// An immutable piece of pre-formatted code text.
///
/// Fragments are value types: every composition method consumes the
/// receiver and returns a new fragment, so a fragment held by one
/// declaration is never changed by another.
///
/// # Example
///
/// ```
/// use tspoet_codegen::CodeBlock;
///
/// let body = CodeBlock::empty()
///     .append_line("this.x = x;")
///     .append_line("this.y = y;");
/// assert_eq!(body.as_str(), "this.x = x;\nthis.y = y;\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeBlock(String);

impl CodeBlock {
    /// Create an empty fragment.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Create a fragment from pre-formatted text.
    pub fn of(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Append raw text.
    pub fn append(mut self, text: impl AsRef<str>) -> Self {
        self.0.push_str(text.as_ref());
        self
    }

    /// Append a line of text followed by a newline.
    pub fn append_line(mut self, text: impl AsRef<str>) -> Self {
        self.0.push_str(text.as_ref());
        self.0.push('\n');
        self
    }

    /// Append another fragment.
    pub fn append_block(mut self, other: &CodeBlock) -> Self {
        self.0.push_str(&other.0);
        self
    }

    /// Join fragments with a separator, skipping empty ones.
    pub fn join<I>(blocks: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = CodeBlock>,
    {
        let parts: Vec<String> = blocks
            .into_iter()
            .filter(CodeBlock::is_not_empty)
            .map(|block| block.0)
            .collect();
        Self(parts.join(separator))
    }

    /// Check whether the fragment holds no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether the fragment holds any text.
    pub fn is_not_empty(&self) -> bool {
        !self.0.is_empty()
    }

    /// Raw-text projection, used for pattern testing and emission.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CodeBlock {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for CodeBlock {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
