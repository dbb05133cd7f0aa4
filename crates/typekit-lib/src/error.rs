use typekit_core::RegistryError;

/// Errors raised while building or querying a typekit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No type of that name is registered.
    #[error("type `{0}` not found")]
    NotFound(String),

    #[error("type `{0}` is not opaque")]
    NotOpaque(String),

    /// An opaque type has no opaque declaration in its typekit.
    ///
    /// Declarations are extracted together with the registry, so this means
    /// the typekit was assembled from mismatched inputs.
    #[error("typekit `{typekit}` has no opaque declaration for `{type_name}`")]
    InternalInconsistency { typekit: String, type_name: String },

    /// The construction surface has no primitive for this kind.
    #[error("unsupported capability `{0}`")]
    UnsupportedCapability(String),

    /// An `<opaque>` registry element lacks a required attribute.
    #[error("malformed opaque declaration: {0}")]
    MalformedOpaque(String),

    #[error(transparent)]
    Registry(RegistryError),
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(name) => Self::NotFound(name),
            other => Self::Registry(other),
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Self::Registry(RegistryError::Xml(err))
    }
}

/// Result type for typekit operations.
pub type Result<T> = std::result::Result<T, Error>;
