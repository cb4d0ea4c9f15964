use std::fmt;

/// Errors that can occur while building or reading a flash cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The kind of failure
    pub kind: ErrorKind,
    /// Human-readable message explaining the failure
    pub message: String,
}

impl Error {
    /// Creates a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedCookie, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

/// The kind of failure behind an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The message could not be encoded into a valid cookie value.
    ///
    /// This is a configuration-level failure and is never retryable.
    EncodingUnavailable,
    /// The cookie name is empty or not an HTTP token
    InvalidCookieName,
    /// A custom severity name contains characters outside `[A-Za-z0-9_-]`
    InvalidSeverity,
    /// A flash cookie read from a request could not be decoded
    MalformedCookie,
    /// The expiration instant cannot be represented
    ExpiryOutOfRange,
    /// The HTTP layer rejected a header value
    InvalidHeader,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::EncodingUnavailable => write!(f, "Encoding unavailable"),
            ErrorKind::InvalidCookieName => write!(f, "Invalid cookie name"),
            ErrorKind::InvalidSeverity => write!(f, "Invalid severity"),
            ErrorKind::MalformedCookie => write!(f, "Malformed flash cookie"),
            ErrorKind::ExpiryOutOfRange => write!(f, "Expiry out of range"),
            ErrorKind::InvalidHeader => write!(f, "Invalid header"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::new(ErrorKind::InvalidCookieName, "name contains ';'");
        assert_eq!(err.to_string(), "Invalid cookie name: name contains ';'");
    }

    #[test]
    fn kind_accessor_matches_field() {
        let err = Error::malformed("missing separator");
        assert_eq!(err.kind(), ErrorKind::MalformedCookie);
        assert_eq!(err.kind, ErrorKind::MalformedCookie);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&Error::new(ErrorKind::EncodingUnavailable, "x"));
    }
}
