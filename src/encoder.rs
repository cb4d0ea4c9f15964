use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::codec;
use crate::cookie::SetCookie;
use crate::decoder::FlashDecoder;
use crate::error::{Error, ErrorKind};
use crate::Flash;

/// How long a flash cookie lives unless configured otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Cookie path used unless configured otherwise.
pub const DEFAULT_PATH: &str = "/";

/// Lowers a [`Flash`] into a [`SetCookie`] instruction.
///
/// The cookie value is `<form-encoded text>/<severity name>`, scoped to
/// `Path=/` and expiring one hour after the clock reading taken during
/// [`encode`](Self::encode).
///
/// The encoder holds no mutable state; one instance can serve any number
/// of threads.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use flash_core::{Flash, FlashEncoder, FixedClock, Severity};
///
/// let clock = FixedClock::new(UNIX_EPOCH + Duration::from_secs(784_108_177));
/// let encoder = FlashEncoder::new().with_clock(clock);
///
/// let flash = Flash::with_level("can't save your post, sorry", Severity::Severe);
/// let cookie = encoder.encode(&flash).unwrap();
///
/// assert_eq!(cookie.name(), "RsFlash");
/// assert_eq!(cookie.value(), "can%27t+save+your+post%2C+sorry/SEVERE");
/// assert_eq!(
///     cookie.attributes(),
///     vec!["Path=/", "Expires=Sun, 06 Nov 1994 08:49:37 GMT"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FlashEncoder<C = SystemClock> {
    path: String,
    ttl: Duration,
    clock: C,
}

impl FlashEncoder<SystemClock> {
    /// Creates an encoder with the default path, TTL and the system clock.
    pub fn new() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            ttl: DEFAULT_TTL,
            clock: SystemClock,
        }
    }
}

impl Default for FlashEncoder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FlashEncoder<C> {
    /// Replaces the clock used to compute expiry dates.
    pub fn with_clock<D: Clock>(self, clock: D) -> FlashEncoder<D> {
        FlashEncoder {
            path: self.path,
            ttl: self.ttl,
            clock,
        }
    }

    /// Sets the `Path` attribute of emitted cookies.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets how long emitted cookies live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the configured cookie path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the configured cookie lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a decoder that clears cookies on the same path.
    pub fn decoder(&self) -> FlashDecoder {
        FlashDecoder::new().with_path(self.path.clone())
    }

    /// Encodes `flash` into a cookie-set instruction.
    ///
    /// Reads the clock once.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidSeverity`] if a hand-built custom severity would not read back
    /// - [`ErrorKind::EncodingUnavailable`] if the value cannot be made cookie-safe
    /// - [`ErrorKind::InvalidCookieName`] if the flash's cookie name is not a token
    /// - [`ErrorKind::ExpiryOutOfRange`] if now + TTL cannot be expressed
    /// - [`ErrorKind::InvalidHeader`] if the configured path is unusable or
    ///   does not start with `/`
    pub fn encode(&self, flash: &Flash) -> Result<SetCookie, Error> {
        let value = codec::encode_value(flash.text(), flash.severity())?;
        let expires = self
            .clock
            .now()
            .checked_add(self.ttl)
            .ok_or_else(|| Error::new(ErrorKind::ExpiryOutOfRange, "now + ttl overflows"))?;
        let cookie = SetCookie::new(flash.cookie_name(), value, self.path.as_str(), expires)?;

        tracing::debug!(
            cookie = %cookie.name(),
            severity = %flash.severity(),
            text_len = flash.text().len(),
            "flash cookie encoded"
        );

        Ok(cookie)
    }
}

impl Flash {
    /// Encodes this message with a default [`FlashEncoder`].
    ///
    /// ```
    /// use flash_core::Flash;
    ///
    /// let cookie = Flash::new("thanks for the post").to_cookie().unwrap();
    /// assert_eq!(cookie.value(), "thanks+for+the+post/INFO");
    /// ```
    pub fn to_cookie(&self) -> Result<SetCookie, Error> {
        FlashEncoder::new().encode(self)
    }
}
