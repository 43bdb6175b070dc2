//! Class declarations and their emission.

use tspoet_codegen::{CodeBlock, CodeWriter};

use crate::decorator::DecoratorSpec;
use crate::error::{Error, Result};
use crate::function::FunctionSpec;
use crate::modifier::{Modifier, emit_modifiers};
use crate::promotion::{self, Promotion};
use crate::property::PropertySpec;
use crate::types::{TypeName, TypeVariable, emit_type_variables};

/// An immutable description of one class declaration.
///
/// Built through a fluent API in which every call consumes the receiver
/// and returns a new value; a partially built declaration can be cloned
/// and forked freely, and emission only reads the finished value.
///
/// # Example
///
/// ```
/// use tspoet::{ClassSpec, FunctionSpec, ParameterSpec, TypeName};
///
/// let point = ClassSpec::new("Point")
///     .prop("x", TypeName::number(), false, &[])
///     .prop("y", TypeName::number(), false, &[])
///     .constructor(
///         FunctionSpec::constructor()
///             .param(ParameterSpec::new("x", TypeName::number()))
///             .param(ParameterSpec::new("y", TypeName::number()))
///             .body_line("this.x = x;")
///             .body_line("this.y = y;"),
///     )
///     .unwrap();
///
/// assert_eq!(
///     point.build(),
///     "class Point {\n\n  constructor(public x: number, public y: number) {}\n\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    pub(crate) name: String,
    pub(crate) doc: CodeBlock,
    pub(crate) decorators: Vec<DecoratorSpec>,
    pub(crate) modifiers: Vec<Modifier>,
    pub(crate) type_variables: Vec<TypeVariable>,
    pub(crate) super_class: Option<TypeName>,
    pub(crate) interfaces: Vec<TypeName>,
    pub(crate) properties: Vec<PropertySpec>,
    pub(crate) constructor: Option<FunctionSpec>,
    pub(crate) members: Vec<FunctionSpec>,
}

impl ClassSpec {
    /// Create a minimal declaration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: CodeBlock::empty(),
            decorators: Vec::new(),
            modifiers: Vec::new(),
            type_variables: Vec::new(),
            super_class: None,
            interfaces: Vec::new(),
            properties: Vec::new(),
            constructor: None,
            members: Vec::new(),
        }
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

    /// Add multiple decorators.
    pub fn decorators(mut self, decorators: impl IntoIterator<Item = DecoratorSpec>) -> Self {
        self.decorators.extend(decorators);
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

    /// Set the superclass.
    ///
    /// A declaration has at most one superclass; setting it twice is an
    /// error rather than a silent overwrite.
    pub fn superclass(mut self, ty: impl Into<TypeName>) -> Result<Self> {
        let ty = ty.into();
        if let Some(existing) = &self.super_class {
            return Err(Error::SuperclassAlreadySet {
                existing: existing.to_string(),
                requested: ty.to_string(),
            });
        }
        self.super_class = Some(ty);
        Ok(self)
    }

    /// Add an implemented interface.
    pub fn interface(mut self, ty: impl Into<TypeName>) -> Self {
        self.interfaces.push(ty.into());
        self
    }

    /// Add multiple implemented interfaces.
    pub fn interfaces<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        self.interfaces.extend(types.into_iter().map(Into::into));
        self
    }

    /// Add a property.
    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    /// Add multiple properties.
    pub fn properties(mut self, properties: impl IntoIterator<Item = PropertySpec>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Convenience: build and add a property from its parts.
    pub fn prop(
        self,
        name: impl Into<String>,
        ty: impl Into<TypeName>,
        optional: bool,
        modifiers: &[Modifier],
    ) -> Self {
        let mut property = PropertySpec::new(name, ty).modifiers(modifiers.iter().copied());
        if optional {
            property = property.optional();
        }
        self.property(property)
    }

    /// Set the primary constructor, replacing any previous one.
    ///
    /// The declaration must carry the constructor marker; build it with
    /// [`FunctionSpec::constructor`].
    pub fn constructor(mut self, ctor: FunctionSpec) -> Result<Self> {
        if !ctor.is_constructor() {
            return Err(Error::NotAConstructor {
                name: ctor.name().to_string(),
            });
        }
        self.constructor = Some(ctor);
        Ok(self)
    }

    /// Clear the primary constructor.
    pub fn no_constructor(mut self) -> Self {
        self.constructor = None;
        self
    }

    /// Add an ordinary method, static or instance.
    ///
    /// Constructor-marked declarations are rejected here: the primary
    /// constructor goes through [`constructor`](Self::constructor) and
    /// overload signatures through [`overload`](Self::overload).
    pub fn method(mut self, method: FunctionSpec) -> Result<Self> {
        if method.is_constructor() {
            return Err(Error::ConstructorAsMethod {
                name: method.name().to_string(),
            });
        }
        self.members.push(method);
        Ok(self)
    }

    /// Add a constructor-overload signature, typically bodiless.
    pub fn overload(mut self, overload: FunctionSpec) -> Result<Self> {
        if !overload.is_constructor() {
            return Err(Error::NotAConstructor {
                name: overload.name().to_string(),
            });
        }
        self.members.push(overload);
        Ok(self)
    }

    /// Get the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emit the declaration into a writer.
    ///
    /// One linear pass: doc comment, decorators, modifiers, header,
    /// standalone fields, primary constructor (with promotable
    /// properties collapsed into its parameter list), constructor
    /// overloads, then methods.
    pub fn emit(&self, writer: &mut CodeWriter) {
        let promotion = promotion::analyze(&self.properties, self.constructor.as_ref());

        writer.emit_doc(&self.doc);
        for decorator in &self.decorators {
            decorator.emit(writer, false);
        }
        emit_modifiers(writer, &self.modifiers, &[]);
        writer.write("class ");
        writer.write(&self.name);
        emit_type_variables(writer, &self.type_variables);
        self.emit_header_tail(writer);

        writer.write(" {");
        writer.newline();
        writer.indent();

        for property in &self.properties {
            if promotion.is_promoted(&property.name) {
                continue;
            }
            writer.blank();
            property.emit(writer, &[Modifier::Public], true);
        }

        if let Some(ctor) = &self.constructor {
            self.emit_constructor(writer, ctor, &promotion);
        }

        for overload in self.members.iter().filter(|m| m.is_constructor()) {
            writer.blank();
            overload.emit(writer, &[Modifier::Public]);
        }

        for method in self.members.iter().filter(|m| !m.is_constructor()) {
            writer.blank();
            method.emit(writer, &[Modifier::Public]);
        }

        writer.dedent();
        if !self.has_empty_body(&promotion) {
            writer.blank();
        }
        writer.line("}");
    }

    /// Convenience: emit into a fresh TypeScript-indented writer.
    pub fn build(&self) -> String {
        let mut writer = CodeWriter::typescript();
        self.emit(&mut writer);
        writer.build()
    }

    /// The `extends`/`implements` fragments, joined by a single space,
    /// omitted entirely when absent.
    fn emit_header_tail(&self, writer: &mut CodeWriter) {
        let extends = match &self.super_class {
            Some(superclass) => CodeBlock::of(format!("extends {superclass}")),
            None => CodeBlock::empty(),
        };
        let implements = if self.interfaces.is_empty() {
            CodeBlock::empty()
        } else {
            let names: Vec<String> = self.interfaces.iter().map(ToString::to_string).collect();
            CodeBlock::of(format!("implements {}", names.join(", ")))
        };
        let tail = CodeBlock::join([extends, implements], " ");
        if tail.is_not_empty() {
            writer.write(" ");
            writer.write(tail.as_str());
        }
    }

    fn emit_constructor(&self, writer: &mut CodeWriter, ctor: &FunctionSpec, promotion: &Promotion) {
        writer.blank();
        writer.emit_doc(&ctor.doc);
        for decorator in &ctor.decorators {
            decorator.emit(writer, true);
        }
        emit_modifiers(writer, &ctor.modifiers, &[]);
        writer.write("constructor");

        ctor.emit_parameter_list(writer, |writer, param, as_rest| {
            match promotion.property(&param.name) {
                Some(property) if !as_rest => {
                    // Parameter property: the target language only treats
                    // the parameter as field-producing with a visibility
                    // or readonly modifier present.
                    let needs_default = !property
                        .modifiers
                        .iter()
                        .any(|m| m.is_visibility() || *m == Modifier::Readonly);
                    let inline = if needs_default {
                        property.with_added_modifiers(&[Modifier::Public])
                    } else {
                        property.clone()
                    };
                    inline.emit(writer, &[], false);
                    param.emit_default_value(writer);
                }
                _ => param.emit(writer, as_rest),
            }
        });

        let body = promotion.body();
        if body.as_str().trim().is_empty() {
            writer.line(" {}");
        } else {
            writer.write(" {");
            writer.newline();
            writer.indent();
            writer.emit_code(body);
            writer.dedent();
            writer.line("}");
        }
    }

    /// A body is empty only when nothing will be rendered inside it: no
    /// primary constructor, no members, and every property promotable.
    /// Decides whether the pre-closing blank line is emitted.
    fn has_empty_body(&self, promotion: &Promotion) -> bool {
        self.constructor.is_none()
            && self.members.is_empty()
            && self
                .properties
                .iter()
                .all(|property| promotion.is_promoted(&property.name))
    }
}
