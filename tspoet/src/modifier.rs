//! Declaration modifier tokens.

use std::fmt;

use tspoet_codegen::CodeWriter;

/// A modifier token on a class, property, parameter, or member.
///
/// Modifiers are emitted in insertion order; no reordering is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Export,
    Declare,
    Abstract,
    Public,
    Protected,
    Private,
    Readonly,
    Static,
    Async,
}

impl Modifier {
    /// The source keyword for this modifier.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Declare => "declare",
            Self::Abstract => "abstract",
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Readonly => "readonly",
            Self::Static => "static",
            Self::Async => "async",
        }
    }

    /// Check if this is an access modifier.
    pub fn is_visibility(&self) -> bool {
        matches!(self, Self::Public | Self::Protected | Self::Private)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Emit modifiers in insertion order, each followed by a space.
///
/// When `modifiers` is empty the caller-supplied `defaults` are
/// substituted; when both are empty nothing is emitted.
pub(crate) fn emit_modifiers(writer: &mut CodeWriter, modifiers: &[Modifier], defaults: &[Modifier]) {
    let effective = if modifiers.is_empty() {
        defaults
    } else {
        modifiers
    };
    for modifier in effective {
        writer.write(modifier.keyword());
        writer.write(" ");
    }
}
