//! Boundary traits between framework request/response types and flash cookies.
//!
//! Framework integrations implement [`ExtractCookies`] for their request
//! type and [`AttachCookie`] for their response type. Both are implemented
//! for [`http::HeaderMap`], which covers hyper, axum and anything else
//! built on the `http` crate.

use http::header::{COOKIE, SET_COOKIE};
use http::HeaderMap;

use crate::cookie::SetCookie;
use crate::error::Error;

/// Reads cookies sent by the client.
///
/// # Examples
///
/// ```
/// use flash_core::web::ExtractCookies;
///
/// struct MyFrameworkRequest {
///     flash: Option<String>,
/// }
///
/// impl ExtractCookies for MyFrameworkRequest {
///     fn cookie(&self, name: &str) -> Option<String> {
///         (name == "RsFlash").then(|| self.flash.clone()).flatten()
///     }
/// }
///
/// let req = MyFrameworkRequest { flash: Some("hi/INFO".to_string()) };
/// assert_eq!(req.cookie("RsFlash").as_deref(), Some("hi/INFO"));
/// ```
pub trait ExtractCookies {
    /// Returns the value of the first cookie called `name`, if the request has one.
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Adds a `Set-Cookie` header to an outgoing response.
pub trait AttachCookie {
    /// Attaches `cookie` to the response.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidHeader`](crate::ErrorKind::InvalidHeader)
    /// if the response type rejects the header.
    fn attach_cookie(&mut self, cookie: &SetCookie) -> Result<(), Error>;
}

impl ExtractCookies for HeaderMap {
    fn cookie(&self, name: &str) -> Option<String> {
        // Lines may carry raw UTF-8 in unrelated cookies
        self.get_all(COOKIE).iter().find_map(|v| {
            let line = String::from_utf8_lossy(v.as_bytes());
            find_cookie(&line, name).map(str::to_string)
        })
    }
}

impl AttachCookie for HeaderMap {
    fn attach_cookie(&mut self, cookie: &SetCookie) -> Result<(), Error> {
        let value = cookie.to_header_value()?;
        self.append(SET_COOKIE, value);
        Ok(())
    }
}

/// Finds cookie `name` in one `Cookie` header line (`a=1; b=2`).
pub(crate) fn find_cookie<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    parse_cookie_line(line).find_map(|(k, v)| (k == name).then_some(v))
}

/// Iterates over the `name=value` pairs of a `Cookie` header line.
///
/// Pairs without `=` are skipped. Surrounding double quotes on a value are
/// removed.
pub(crate) fn parse_cookie_line(line: &str) -> impl Iterator<Item = (&str, &str)> {
    line.split(';').filter_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        Some((name, value))
    })
}
