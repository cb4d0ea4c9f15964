//! Framework-neutral request and response adapters.

use http::header::{LOCATION, SET_COOKIE};
use http::StatusCode;

use crate::cookie::SetCookie;
use crate::error::Error;

use super::extract::{find_cookie, parse_cookie_line};
use super::{AttachCookie, ExtractCookies};

/// Adapter for the parts of an incoming request the flash mechanism reads.
///
/// `RequestAdapter` holds simple, owned data so it does not couple to any
/// framework's request type. Integrations copy the request ID and the raw
/// `Cookie` header lines into it.
///
/// # Examples
///
/// ```
/// use flash_core::web::{ExtractCookies, RequestAdapter};
///
/// let mut adapter = RequestAdapter::new("req-12345".to_string());
/// adapter.add_cookie_header("sid=abc; RsFlash=thanks+for+the+post/INFO".to_string());
///
/// assert_eq!(adapter.request_id(), "req-12345");
/// assert_eq!(adapter.cookie("RsFlash").as_deref(), Some("thanks+for+the+post/INFO"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    /// Unique request identifier (required)
    request_id: String,
    /// Raw `Cookie` header lines, in arrival order
    cookie_headers: Vec<String>,
}

impl RequestAdapter {
    /// Creates a new request adapter with the given request ID and no cookies.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            cookie_headers: Vec::new(),
        }
    }

    /// Adds one raw `Cookie` header line (`name=value; other=value`).
    pub fn add_cookie_header(&mut self, line: String) {
        self.cookie_headers.push(line);
    }

    /// Adds a single cookie as if the client had sent it.
    pub fn add_cookie(&mut self, name: &str, value: &str) {
        self.cookie_headers.push(format!("{}={}", name, value));
    }

    /// Returns a reference to the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns every cookie pair across all `Cookie` lines.
    pub fn cookies(&self) -> Vec<(String, String)> {
        self.cookie_headers
            .iter()
            .flat_map(|line| parse_cookie_line(line))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl ExtractCookies for RequestAdapter {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookie_headers
            .iter()
            .find_map(|line| find_cookie(line, name))
            .map(str::to_string)
    }
}

/// A minimal outgoing response: status, headers and a text body.
///
/// Handlers in this crate build a `ResponseAdapter`; integrations copy it
/// into their framework's response type.
///
/// # Examples
///
/// ```
/// use flash_core::web::{AttachCookie, ResponseAdapter};
/// use flash_core::Flash;
///
/// let mut response = ResponseAdapter::see_other("/comments");
/// let cookie = Flash::new("thanks for the post").to_cookie().unwrap();
/// response.attach_cookie(&cookie).unwrap();
///
/// assert_eq!(response.status().as_u16(), 303);
/// assert_eq!(response.set_cookies().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseAdapter {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: String,
}

impl ResponseAdapter {
    /// Creates an empty response with the given status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Creates a `200 OK` response with a text body.
    pub fn ok(body: impl Into<String>) -> Self {
        let mut response = Self::new(StatusCode::OK);
        response.body = body.into();
        response
    }

    /// Creates a `303 See Other` redirect to `location`.
    pub fn see_other(location: &str) -> Self {
        let mut response = Self::new(StatusCode::SEE_OTHER);
        response.add_header(LOCATION.as_str(), location);
        response
    }

    /// Appends a header.
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Returns the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the first value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns every `Set-Cookie` value.
    pub fn set_cookies(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(SET_COOKIE.as_str()))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns the body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl AttachCookie for ResponseAdapter {
    fn attach_cookie(&mut self, cookie: &SetCookie) -> Result<(), Error> {
        self.add_header(SET_COOKIE.as_str(), &cookie.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn request_adapter_new() {
        let adapter = RequestAdapter::new("req-test".to_string());
        assert_eq!(adapter.request_id(), "req-test");
        assert!(adapter.cookies().is_empty());
        assert_eq!(adapter.cookie("RsFlash"), None);
    }

    #[test]
    fn request_adapter_add_cookie() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_cookie("RsFlash", "hi/INFO");
        assert_eq!(adapter.cookie("RsFlash").as_deref(), Some("hi/INFO"));
    }

    #[test]
    fn request_adapter_collects_all_cookies() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_cookie_header("a=1; b=2".to_string());
        adapter.add_cookie("c", "3");

        let cookies = adapter.cookies();
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies[2], ("c".to_string(), "3".to_string()));
    }

    #[test]
    fn first_cookie_wins() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_cookie("RsFlash", "first/INFO");
        adapter.add_cookie("RsFlash", "second/INFO");
        assert_eq!(adapter.cookie("RsFlash").as_deref(), Some("first/INFO"));
    }

    #[test]
    fn see_other_sets_location() {
        let response = ResponseAdapter::see_other("/posts");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("Location"), Some("/posts"));
    }

    #[test]
    fn ok_has_body() {
        let response = ResponseAdapter::ok("hello");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), "hello");
        assert!(response.set_cookies().is_empty());
    }

    #[test]
    fn attach_cookie_adds_set_cookie_header() {
        let mut response = ResponseAdapter::new(StatusCode::OK);
        let cookie = SetCookie::new("RsFlash", "x/INFO", "/", UNIX_EPOCH).unwrap();
        response.attach_cookie(&cookie).unwrap();

        assert_eq!(
            response.set_cookies(),
            vec!["RsFlash=x/INFO; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT"]
        );
        assert_eq!(response.headers().len(), 1);
    }
}
