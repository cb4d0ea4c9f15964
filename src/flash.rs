use std::fmt;

use crate::Severity;

/// Cookie name used when none is given explicitly.
pub const DEFAULT_COOKIE_NAME: &str = "RsFlash";

/// A one-shot message to show on the next request.
///
/// `Flash` is an immutable value: the text, its severity and the name of
/// the cookie that will carry it. Turning it into a cookie is the job of
/// [`FlashEncoder`](crate::FlashEncoder).
///
/// # Examples
///
/// ```
/// use flash_core::{Flash, Severity, DEFAULT_COOKIE_NAME};
///
/// let flash = Flash::new("thanks for the post");
/// assert_eq!(flash.severity(), &Severity::Info);
/// assert_eq!(flash.cookie_name(), DEFAULT_COOKIE_NAME);
/// assert_eq!(flash.to_string(), "INFO/thanks for the post");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flash {
    text: String,
    severity: Severity,
    cookie_name: String,
}

impl Flash {
    /// Creates an informational flash message under the default cookie name.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_level(text, Severity::Info)
    }

    /// Creates a `Severe` flash message from an error's display text.
    ///
    /// ```
    /// use flash_core::{Flash, Severity};
    ///
    /// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let flash = Flash::from_error(&err);
    /// assert_eq!(flash.text(), "disk full");
    /// assert_eq!(flash.severity(), &Severity::Severe);
    /// ```
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::from_error_with_level(err, Severity::Severe)
    }

    /// Creates a flash message from an error's display text with an explicit severity.
    pub fn from_error_with_level<E>(err: &E, severity: Severity) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::with_level(err.to_string(), severity)
    }

    /// Creates a flash message with an explicit severity under the default cookie name.
    pub fn with_level(text: impl Into<String>, severity: Severity) -> Self {
        Self::with_cookie(text, severity, DEFAULT_COOKIE_NAME)
    }

    /// Creates a flash message with an explicit severity and cookie name.
    ///
    /// All other constructors delegate here. The cookie name is checked when
    /// the message is encoded, not here.
    pub fn with_cookie(
        text: impl Into<String>,
        severity: Severity,
        cookie_name: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            severity,
            cookie_name: cookie_name.into(),
        }
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the severity tag.
    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    /// Returns the name of the cookie carrying this message.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl fmt::Display for Flash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.severity, self.text)
    }
}
