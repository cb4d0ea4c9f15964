use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::codec::{is_cookie_name, is_cookie_value};
use crate::error::{Error, ErrorKind};

/// Latest instant an HTTP-date can express (9999-12-31T23:59:59Z).
const MAX_HTTP_DATE_SECS: u64 = 253_402_300_799;

/// A cookie-set instruction: what goes into one `Set-Cookie` header.
///
/// Every `SetCookie` is valid by construction, so formatting it never
/// fails and never produces a garbled header.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use flash_core::SetCookie;
///
/// let expires = UNIX_EPOCH + Duration::from_secs(784_111_777);
/// let cookie = SetCookie::new("RsFlash", "hi/INFO", "/", expires).unwrap();
///
/// assert_eq!(
///     cookie.to_string(),
///     "RsFlash=hi/INFO; Path=/; Expires=Sun, 06 Nov 1994 08:49:37 GMT"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    name: String,
    value: String,
    path: String,
    expires: SystemTime,
}

impl SetCookie {
    /// Creates a cookie-set instruction.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidCookieName`] if `name` is not an HTTP token
    /// - [`ErrorKind::EncodingUnavailable`] if `value` has bytes outside `cookie-octet`
    /// - [`ErrorKind::InvalidHeader`] if `path` does not start with `/` or contains `;`, control or non-ASCII characters
    /// - [`ErrorKind::ExpiryOutOfRange`] if `expires` has no HTTP-date form
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        path: impl Into<String>,
        expires: SystemTime,
    ) -> Result<Self, Error> {
        let name = name.into();
        let value = value.into();
        let path = path.into();

        if !is_cookie_name(&name) {
            return Err(Error::new(
                ErrorKind::InvalidCookieName,
                format!("'{}' is not a valid cookie name", name.escape_debug()),
            ));
        }
        if !is_cookie_value(&value) {
            return Err(Error::new(
                ErrorKind::EncodingUnavailable,
                "cookie value contains bytes outside the cookie-octet range",
            ));
        }
        if !path.starts_with('/')
            || path
                .chars()
                .any(|c| c == ';' || !c.is_ascii() || c.is_ascii_control())
        {
            return Err(Error::new(
                ErrorKind::InvalidHeader,
                format!("'{}' is not a valid cookie path", path.escape_debug()),
            ));
        }
        check_expiry(expires)?;

        Ok(Self {
            name,
            value,
            path,
            expires,
        })
    }

    /// Builds the instruction that deletes cookie `name` on the client.
    ///
    /// The value is empty and the expiry is the Unix epoch.
    ///
    /// # Errors
    ///
    /// Same as [`SetCookie::new`] for `name` and `path`.
    pub fn clear(name: impl Into<String>, path: impl Into<String>) -> Result<Self, Error> {
        Self::new(name, "", path, UNIX_EPOCH)
    }

    /// Returns the cookie name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cookie value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the `Path` attribute.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the expiry instant.
    pub fn expires(&self) -> SystemTime {
        self.expires
    }

    /// Returns the `Expires` attribute value as an IMF-fixdate, always in GMT.
    pub fn expires_http_date(&self) -> String {
        httpdate::fmt_http_date(self.expires)
    }

    /// Returns the cookie attributes in header order: `Path=..`, `Expires=..`.
    pub fn attributes(&self) -> Vec<String> {
        vec![
            format!("Path={}", self.path),
            format!("Expires={}", self.expires_http_date()),
        ]
    }

    /// Returns `true` if this instruction removes the cookie.
    pub fn is_removal(&self) -> bool {
        self.value.is_empty() && self.expires == UNIX_EPOCH
    }

    /// Converts to a `Set-Cookie` header value for the `http` crate.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidHeader`] if `http` rejects the value.
    pub fn to_header_value(&self) -> Result<http::HeaderValue, Error> {
        http::HeaderValue::try_from(self.to_string())
            .map_err(|e| Error::new(ErrorKind::InvalidHeader, e.to_string()))
    }
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        for attr in self.attributes() {
            write!(f, "; {}", attr)?;
        }
        Ok(())
    }
}

fn check_expiry(expires: SystemTime) -> Result<(), Error> {
    let secs = expires
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::new(ErrorKind::ExpiryOutOfRange, "expiry is before 1970"))?;
    if secs > Duration::from_secs(MAX_HTTP_DATE_SECS) {
        return Err(Error::new(
            ErrorKind::ExpiryOutOfRange,
            "expiry is after year 9999",
        ));
    }
    Ok(())
}
