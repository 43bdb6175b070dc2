//! Immutable TypeScript class declaration specs and their emission.
//!
//! Declarations are assembled through a fluent API in which every call
//! returns a new value, then rendered in one linear pass: doc comment,
//! decorators, modifiers, `class` header, fields, constructor(s), and
//! methods, in that order.
//!
//! Emission recognizes constructor parameters whose sole purpose is to
//! initialize a same-named field (same name, type, and optionality,
//! plus a standalone `this.x = x;` statement in the constructor body)
//! and collapses the field into constructor-parameter property
//! shorthand, removing the now-redundant statement from the body.
//! Anything short of an exact match conservatively renders as an
//! ordinary field.
//!
//! # Example
//!
//! ```
//! use tspoet::{ClassSpec, FunctionSpec, ParameterSpec, TypeName};
//!
//! let point = ClassSpec::new("Point")
//!     .prop("x", TypeName::number(), false, &[])
//!     .prop("y", TypeName::number(), false, &[])
//!     .constructor(
//!         FunctionSpec::constructor()
//!             .param(ParameterSpec::new("x", TypeName::number()))
//!             .param(ParameterSpec::new("y", TypeName::number()))
//!             .body_line("this.x = x;")
//!             .body_line("this.y = y;"),
//!     )?;
//!
//! assert_eq!(
//!     point.build(),
//!     "class Point {\n\n  constructor(public x: number, public y: number) {}\n\n}\n"
//! );
//! # Ok::<(), tspoet::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`ClassSpec`] - The class declaration aggregate and its emission
//! - [`promotion`] - Constructor-property promotion analysis
//! - [`FunctionSpec`], [`ParameterSpec`] - Callable members
//! - [`PropertySpec`] - Field declarations
//! - [`DecoratorSpec`], [`Modifier`], [`TypeName`], [`TypeVariable`] -
//!   Declaration parts

mod class;
mod decorator;
mod error;
mod function;
mod modifier;
mod property;
mod types;

pub mod promotion;

pub use class::ClassSpec;
pub use decorator::DecoratorSpec;
pub use error::{Error, Result};
pub use function::{FunctionSpec, ParameterSpec};
pub use modifier::Modifier;
pub use property::PropertySpec;
pub use tspoet_codegen::{CodeBlock, CodeWriter, Indent};
pub use types::{TypeName, TypeVariable};
