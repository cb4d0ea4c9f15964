use crate::codec;
use crate::cookie::SetCookie;
use crate::encoder::DEFAULT_PATH;
use crate::error::Error;
use crate::Flash;

/// Reads flash cookies back and produces the instruction that clears them.
///
/// This is the companion of [`FlashEncoder`](crate::FlashEncoder): the
/// value is split on the first `/`, the left half is form-decoded into the
/// text and the right half is looked up as a [`Severity`](crate::Severity).
///
/// # Examples
///
/// ```
/// use flash_core::{FlashDecoder, Severity};
///
/// let decoder = FlashDecoder::new();
/// let flash = decoder.decode("RsFlash", "thanks+for+the+post/INFO").unwrap();
/// assert_eq!(flash.text(), "thanks for the post");
/// assert_eq!(flash.severity(), &Severity::Info);
///
/// let clear = decoder.clear("RsFlash").unwrap();
/// assert_eq!(clear.to_string(), "RsFlash=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashDecoder {
    path: String,
}

impl FlashDecoder {
    /// Creates a decoder that clears cookies on `Path=/`.
    pub fn new() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
        }
    }

    /// Sets the path used for the clearing cookie.
    ///
    /// Must match the path the cookie was set with, or the browser keeps it.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns the configured path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decodes the value of cookie `cookie_name` into a [`Flash`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedCookie`](crate::ErrorKind::MalformedCookie)
    /// if the value does not follow `<encoded text>/<severity>`.
    pub fn decode(&self, cookie_name: &str, value: &str) -> Result<Flash, Error> {
        let (text, severity) = codec::decode_value(value)?;
        Ok(Flash::with_cookie(text, severity, cookie_name))
    }

    /// Builds the instruction that removes cookie `cookie_name` on the client.
    ///
    /// # Errors
    ///
    /// Fails if the name is not a valid cookie name or the path is unusable.
    pub fn clear(&self, cookie_name: &str) -> Result<SetCookie, Error> {
        SetCookie::clear(cookie_name, self.path.as_str())
    }
}

impl Default for FlashDecoder {
    fn default() -> Self {
        Self::new()
    }
}
