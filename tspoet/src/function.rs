//! Function, method, and constructor declarations.

use tspoet_codegen::{CodeBlock, CodeWriter};

use crate::decorator::DecoratorSpec;
use crate::modifier::{Modifier, emit_modifiers};
use crate::types::{TypeName, TypeVariable, emit_type_variables};

/// A parameter of a function or constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeName,
    /// Whether the parameter is optional (`name?: T`).
    pub optional: bool,
    /// Modifiers, in insertion order.
    pub modifiers: Vec<Modifier>,
    /// Decorators, in insertion order (emitted inline).
    pub decorators: Vec<DecoratorSpec>,
    /// Default value expression, if any.
    pub default_value: Option<CodeBlock>,
}

impl ParameterSpec {
    /// Create a new required parameter.
    pub fn new(name: impl Into<String>, ty: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            modifiers: Vec::new(),
            decorators: Vec::new(),
            default_value: None,
        }
    }

    /// Mark the parameter optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add a decorator.
    pub fn decorator(mut self, decorator: DecoratorSpec) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Set a default value.
    pub fn default(mut self, value: impl Into<CodeBlock>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Emit the parameter.
    pub fn emit(&self, writer: &mut CodeWriter, as_rest: bool) {
        for decorator in &self.decorators {
            decorator.emit(writer, true);
        }
        emit_modifiers(writer, &self.modifiers, &[]);
        if as_rest {
            writer.write("...");
        }
        writer.write(&self.name);
        if self.optional {
            writer.write("?");
        }
        writer.write(": ");
        writer.write(&self.ty.to_string());
        self.emit_default_value(writer);
    }

    /// Emit the ` = <value>` fragment, if a default value is set.
    pub fn emit_default_value(&self, writer: &mut CodeWriter) {
        if let Some(value) = &self.default_value {
            writer.write(" = ");
            writer.write(value.as_str());
        }
    }
}

/// An immutable record of one callable class member.
///
/// Covers ordinary methods, the primary constructor, and bodiless
/// constructor-overload signatures; [`is_constructor`](Self::is_constructor)
/// distinguishes the constructor-marked kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    pub(crate) name: String,
    pub(crate) doc: CodeBlock,
    pub(crate) decorators: Vec<DecoratorSpec>,
    pub(crate) modifiers: Vec<Modifier>,
    pub(crate) type_variables: Vec<TypeVariable>,
    pub(crate) params: Vec<ParameterSpec>,
    pub(crate) rest: Option<ParameterSpec>,
    pub(crate) return_type: Option<TypeName>,
    pub(crate) body: Option<CodeBlock>,
    pub(crate) is_constructor: bool,
}

impl FunctionSpec {
    /// Create a new named function or method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: CodeBlock::empty(),
            decorators: Vec::new(),
            modifiers: Vec::new(),
            type_variables: Vec::new(),
            params: Vec::new(),
            rest: None,
            return_type: None,
            body: None,
            is_constructor: false,
        }
    }

    /// Create a constructor-marked declaration.
    pub fn constructor() -> Self {
        let mut spec = Self::new("constructor");
        spec.is_constructor = true;
        spec
    }

    /// Set the documentation comment.
    pub fn doc(mut self, doc: impl Into<CodeBlock>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Add a decorator.
    pub fn decorator(mut self, decorator: DecoratorSpec) -> Self {
        self.decorators.push(decorator);
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

    /// Add a generic type parameter.
    pub fn type_variable(mut self, variable: TypeVariable) -> Self {
        self.type_variables.push(variable);
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParameterSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Add multiple parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = ParameterSpec>) -> Self {
        self.params.extend(params);
        self
    }

    /// Set the trailing rest parameter (`...name: T[]`).
    pub fn rest(mut self, param: ParameterSpec) -> Self {
        self.rest = Some(param);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: impl Into<TypeName>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Replace the body with a pre-built fragment.
    pub fn body(mut self, body: impl Into<CodeBlock>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a line to the body, creating it when absent.
    pub fn body_line(mut self, line: impl AsRef<str>) -> Self {
        let body = self.body.take().unwrap_or_default();
        self.body = Some(body.append_line(line));
        self
    }

    /// Get the declaration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether this declaration carries the constructor marker.
    pub fn is_constructor(&self) -> bool {
        self.is_constructor
    }

    /// Check whether this declaration has a body.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Look up a non-rest parameter by name (first match).
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Emit the declaration as a class member.
    ///
    /// `default_modifiers` substitute for an empty modifier list.
    /// Bodiless declarations emit a signature terminated by `;`.
    pub fn emit(&self, writer: &mut CodeWriter, default_modifiers: &[Modifier]) {
        writer.emit_doc(&self.doc);
        for decorator in &self.decorators {
            decorator.emit(writer, false);
        }
        emit_modifiers(writer, &self.modifiers, default_modifiers);
        if self.is_constructor {
            writer.write("constructor");
        } else {
            writer.write(&self.name);
        }
        emit_type_variables(writer, &self.type_variables);
        self.emit_parameter_list(writer, |writer, param, as_rest| param.emit(writer, as_rest));
        if let Some(ret) = &self.return_type {
            writer.write(": ");
            writer.write(&ret.to_string());
        }
        match &self.body {
            None => {
                writer.write(";");
                writer.newline();
            }
            Some(body) if body.as_str().trim().is_empty() => {
                writer.line(" {}");
            }
            Some(body) => {
                writer.write(" {");
                writer.newline();
                writer.indent();
                writer.emit_code(body);
                writer.dedent();
                writer.line("}");
            }
        }
    }

    /// Emit the parenthesized parameter list, invoking `emit_param` for
    /// each parameter. The closure receives the writer, the parameter,
    /// and whether it is the trailing rest parameter; this is the seam
    /// through which class emission injects promoted properties.
    pub fn emit_parameter_list<F>(&self, writer: &mut CodeWriter, mut emit_param: F)
    where
        F: FnMut(&mut CodeWriter, &ParameterSpec, bool),
    {
        writer.write("(");
        let mut first = true;
        for param in &self.params {
            if !first {
                writer.write(", ");
            }
            first = false;
            emit_param(writer, param, false);
        }
        if let Some(rest) = &self.rest {
            if !first {
                writer.write(", ");
            }
            emit_param(writer, rest, true);
        }
        writer.write(")");
    }
}
