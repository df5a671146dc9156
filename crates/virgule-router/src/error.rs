use thiserror::Error;

/// Errors produced by table construction and navigation.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Two routes registered the same path.
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    /// Two routes registered the same name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// A route was registered with a non-canonical path literal.
    #[error("route path `{0}` is not canonical")]
    InvalidPath(String),

    /// No route in the table matches the requested path.
    #[error("no route matches `{path}`")]
    NotFound { path: String },

    /// The deferred view factory failed; the next navigation retries.
    #[error("failed to load view for route `{name}`")]
    Load {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}
