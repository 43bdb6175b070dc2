//! Decorator descriptors.

use tspoet_codegen::{CodeBlock, CodeWriter};

/// A decorator applied to a class, member, property, or parameter.
///
/// # Example
///
/// ```
/// use tspoet::DecoratorSpec;
///
/// let injectable = DecoratorSpec::new("Injectable");
/// let component = DecoratorSpec::new("Component").arg("{ selector: \"app\" }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorSpec {
    pub(crate) name: String,
    pub(crate) args: Vec<CodeBlock>,
}

impl DecoratorSpec {
    /// Create a new decorator without call arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a call argument.
    pub fn arg(mut self, arg: impl Into<CodeBlock>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple call arguments.
    pub fn args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CodeBlock>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Get the decorator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emit the decorator.
    ///
    /// Block form ends the line (class and member position); inline form
    /// is followed by a single space (parameter position).
    pub fn emit(&self, writer: &mut CodeWriter, inline: bool) {
        writer.write("@");
        writer.write(&self.name);
        if !self.args.is_empty() {
            let rendered: Vec<&str> = self.args.iter().map(CodeBlock::as_str).collect();
            writer.write(&format!("({})", rendered.join(", ")));
        }
        if inline {
            writer.write(" ");
        } else {
            writer.newline();
        }
    }
}
