//! TypeScript type references and generic type parameters.

use std::fmt;

use tspoet_codegen::CodeWriter;

/// A reference to a TypeScript type.
///
/// Usable as a superclass, an implemented interface, or the type of a
/// property, parameter, or return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// A plain named type (`number`, `User`).
    Named(String),
    /// A generic type with type arguments (`Map<string, number>`).
    Parameterized {
        /// Base type name.
        base: String,
        /// Type arguments.
        args: Vec<TypeName>,
    },
}

impl TypeName {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a generic type reference.
    pub fn parameterized(base: impl Into<String>, args: Vec<TypeName>) -> Self {
        Self::Parameterized {
            base: base.into(),
            args,
        }
    }

    /// Convenience: the `string` primitive.
    pub fn string() -> Self {
        Self::named("string")
    }

    /// Convenience: the `number` primitive.
    pub fn number() -> Self {
        Self::named("number")
    }

    /// Convenience: the `boolean` primitive.
    pub fn boolean() -> Self {
        Self::named("boolean")
    }

    /// Convenience: the `any` type.
    pub fn any() -> Self {
        Self::named("any")
    }

    /// Convenience: the `void` type.
    pub fn void() -> Self {
        Self::named("void")
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Parameterized { base, args } => {
                let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
                write!(f, "{}<{}>", base, rendered.join(", "))
            }
        }
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

/// A generic type parameter with an optional `extends` bound and an
/// optional default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeVariable {
    pub name: String,
    pub bound: Option<TypeName>,
    pub default: Option<TypeName>,
}

impl TypeVariable {
    /// Create a new unbounded type variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
            default: None,
        }
    }

    /// Set the `extends` bound.
    pub fn bound(mut self, ty: TypeName) -> Self {
        self.bound = Some(ty);
        self
    }

    /// Set the default type.
    pub fn default(mut self, ty: TypeName) -> Self {
        self.default = Some(ty);
        self
    }
}

impl fmt::Display for TypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(bound) = &self.bound {
            write!(f, " extends {bound}")?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

/// Emit an angle-bracketed type-parameter list; nothing when empty.
pub(crate) fn emit_type_variables(writer: &mut CodeWriter, variables: &[TypeVariable]) {
    if variables.is_empty() {
        return;
    }
    let rendered: Vec<String> = variables.iter().map(ToString::to_string).collect();
    writer.write(&format!("<{}>", rendered.join(", ")));
}
