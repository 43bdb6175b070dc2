//! Property (field) declarations.

use tspoet_codegen::{CodeBlock, CodeWriter};

use crate::decorator::DecoratorSpec;
use crate::modifier::{Modifier, emit_modifiers};
use crate::types::TypeName;

/// An immutable record of one declared field.
///
/// A property normally emits as a standalone field declaration. When a
/// class's primary constructor has a parameter mirroring the property
/// (same name, type, and optionality) whose only job is `this.x = x;`,
/// emission collapses the property into constructor-parameter shorthand
/// instead; see [`ClassSpec`](crate::ClassSpec).
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: TypeName,
    /// Whether the property is optional (`name?: T`).
    pub optional: bool,
    /// Initializer expression, if any.
    pub initializer: Option<CodeBlock>,
    /// Modifiers, in insertion order.
    pub modifiers: Vec<Modifier>,
    /// Decorators, in insertion order.
    pub decorators: Vec<DecoratorSpec>,
    /// Documentation comment.
    pub doc: CodeBlock,
}

impl PropertySpec {
    /// Create a new required property.
    pub fn new(name: impl Into<String>, ty: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            initializer: None,
            modifiers: Vec::new(),
            decorators: Vec::new(),
            doc: CodeBlock::empty(),
        }
    }

    /// Mark the property optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the initializer expression.
    pub fn initializer(mut self, init: impl Into<CodeBlock>) -> Self {
        self.initializer = Some(init.into());
        self
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add multiple modifiers.
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Add a decorator.
    pub fn decorator(mut self, decorator: DecoratorSpec) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Set the documentation comment.
    pub fn doc(mut self, doc: impl Into<CodeBlock>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Return a copy with the given modifiers appended.
    pub fn with_added_modifiers(&self, modifiers: &[Modifier]) -> Self {
        let mut copy = self.clone();
        copy.modifiers.extend_from_slice(modifiers);
        copy
    }

    /// Emit the property.
    ///
    /// With `as_field` the property is a standalone field declaration:
    /// doc comment and decorators on their own lines, terminated by `;`,
    /// initializer included. Without it the property renders as an
    /// inline parameter-level field declaration: decorators inline, no
    /// terminator, no initializer.
    pub fn emit(&self, writer: &mut CodeWriter, default_modifiers: &[Modifier], as_field: bool) {
        if as_field {
            writer.emit_doc(&self.doc);
        }
        for decorator in &self.decorators {
            decorator.emit(writer, !as_field);
        }
        emit_modifiers(writer, &self.modifiers, default_modifiers);
        writer.write(&self.name);
        if self.optional {
            writer.write("?");
        }
        writer.write(": ");
        writer.write(&self.ty.to_string());
        if as_field {
            if let Some(init) = &self.initializer {
                writer.write(" = ");
                writer.write(init.as_str());
            }
            writer.write(";");
            writer.newline();
        }
    }
}
