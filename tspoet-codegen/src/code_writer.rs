//! Stateful writer for generating properly indented code.

use super::{CodeBlock, Indent};

/// Writer with a mid-line cursor and indentation tracking.
///
/// Declaration specs drive a writer through one emission pass: partial
/// line pieces via [`write`](Self::write), line breaks via
/// [`newline`](Self::newline), and nested blocks via
/// [`indent`](Self::indent) / [`dedent`](Self::dedent). Indentation is
/// applied lazily, when the first non-empty text of a line is written.
///
/// # Example
///
/// ```
/// use tspoet_codegen::CodeWriter;
///
/// let mut writer = CodeWriter::typescript();
/// writer.line("function greet() {");
/// writer.indent();
/// writer.line("return \"hi\";");
/// writer.dedent();
/// writer.line("}");
///
/// assert_eq!(writer.build(), "function greet() {\n  return \"hi\";\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    indent: Indent,
    indent_level: usize,
    buffer: String,
    at_line_start: bool,
}

impl CodeWriter {
    /// Create a new writer with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            indent_level: 0,
            buffer: String::new(),
            at_line_start: true,
        }
    }

    /// Create a new writer with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Write text at the cursor, indenting at the start of a line.
    ///
    /// Embedded newlines break the line; subsequent text is indented at
    /// the current level.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let mut first = true;
        for part in text.split('\n') {
            if !first {
                self.newline();
            }
            first = false;
            if part.is_empty() {
                continue;
            }
            if self.at_line_start {
                for _ in 0..self.indent_level {
                    self.buffer.push_str(self.indent.as_str());
                }
                self.at_line_start = false;
            }
            self.buffer.push_str(part);
        }
    }

    /// Write a full line: text followed by a newline.
    pub fn line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    /// Break the current line.
    pub fn newline(&mut self) {
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    /// Emit a blank separator line, finishing the current line first.
    pub fn blank(&mut self) {
        if !self.at_line_start {
            self.newline();
        }
        self.buffer.push('\n');
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Emit a multi-line fragment, re-indenting every line.
    ///
    /// Leading and trailing newlines of the fragment are dropped;
    /// interior blank lines are preserved without indentation.
    pub fn emit_code(&mut self, code: &CodeBlock) {
        for line in code.as_str().trim_matches('\n').lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.buffer.push('\n');
            } else {
                self.line(line);
            }
        }
    }

    /// Emit a doc comment, `/** one-liner */` or block form for
    /// multi-line text. Empty fragments emit nothing.
    pub fn emit_doc(&mut self, doc: &CodeBlock) {
        let text = doc.as_str().trim();
        if text.is_empty() {
            return;
        }
        if !text.contains('\n') {
            self.line(&format!("/** {text} */"));
            return;
        }
        self.line("/**");
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.line(" *");
            } else {
                self.line(&format!(" * {line}"));
            }
        }
        self.line(" */");
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::typescript()
    }
}
