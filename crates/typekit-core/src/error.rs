/// Errors raised by registry lookups, construction and XML import.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No type (or alias) of that name exists in the registry.
    #[error("type `{0}` not found")]
    NotFound(String),

    /// A type of that name already exists with a different definition.
    #[error("type `{0}` is already defined differently")]
    Conflict(String),

    /// Type names are absolute paths and must start with `/`.
    #[error("invalid type name `{0}`")]
    InvalidName(String),

    #[error("malformed registry XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A declaration is missing attributes or carries unparsable values.
    #[error("malformed <{element}> declaration: {reason}")]
    MalformedDeclaration { element: String, reason: String },
}

impl RegistryError {
    pub(crate) fn malformed(element: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDeclaration {
            element: element.to_owned(),
            reason: reason.into(),
        }
    }
}

/// A type category name that has no construction primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type category `{0}`")]
pub struct UnknownCategory(pub String);

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
