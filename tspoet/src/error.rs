use thiserror::Error;

/// Result type for declaration-building operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Invariant violations raised by the fluent declaration API.
///
/// These surface synchronously at the mutating call that caused them.
/// Emission itself never fails: properties that don't match the
/// promotion pattern simply render as ordinary fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("superclass is already set to `{existing}`, refusing to replace it with `{requested}`")]
    SuperclassAlreadySet { existing: String, requested: String },

    #[error(
        "`{name}` is marked as a constructor; set it as the primary constructor or add it with `overload`"
    )]
    ConstructorAsMethod { name: String },

    #[error("`{name}` is not marked as a constructor; build it with `FunctionSpec::constructor`")]
    NotAConstructor { name: String },
}
