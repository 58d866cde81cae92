use std::borrow::Cow;

/// All possible error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client configuration cannot be used to build a request,
    /// for example because the access token is empty.
    Configuration,
    /// A path segment or a parameter has an invalid value.
    InvalidArgument,
    /// A required argument has not been provided.
    MissingArgument,
    /// The request could not be delivered to the server or its response
    /// could not be read.
    Transport,
    /// The response body is not valid `JSON` for the requested type.
    JsonResponse,
    /// An error occurred while reading a byte stream response.
    StreamResponse,
}

impl ErrorKind {
    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::Configuration => "Invalid Configuration",
            Self::InvalidArgument => "Invalid Argument",
            Self::MissingArgument => "Missing Argument",
            Self::Transport => "Transport",
            Self::JsonResponse => "Json Response",
            Self::StreamResponse => "Stream Response",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.description().fmt(f)
    }
}

/// Library error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {description}")]
pub struct Error {
    kind: ErrorKind,
    description: Cow<'static, str>,
}

impl Error {
    /// Creates an [`Error`] from an [`ErrorKind`] and a description.
    #[must_use]
    pub fn new(kind: ErrorKind, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    /// Returns the [`ErrorKind`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn configuration(description: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, description)
    }

    pub(crate) fn invalid_argument(description: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, description)
    }

    pub(crate) fn missing_argument(description: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::MissingArgument, description)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::new(ErrorKind::Transport, e.to_string())
    }
}

/// A specialized [`Result`] type for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
