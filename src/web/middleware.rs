//! Setting and consuming flash cookies around a request.
//!
//! # Flow
//!
//! ```text
//! POST /comments
//!   ↓ handler calls attach_flash()
//! 303 See Other + Set-Cookie: RsFlash=<text>/<severity>; Path=/; Expires=<now+1h>
//!   ↓ browser follows the redirect
//! GET /comments  (Cookie: RsFlash=...)
//!   ↓ handler calls consume_flash() and FlashConsumption::apply()
//! 200 OK (message rendered) + Set-Cookie: RsFlash=; Path=/; Expires=<epoch>
//! ```

use crate::clock::Clock;
use crate::decoder::FlashDecoder;
use crate::encoder::FlashEncoder;
use crate::error::Error;
use crate::logging::FlashLog;
use crate::{Flash, SetCookie};

use super::{AttachCookie, ExtractCookies};

/// Encodes `flash` and attaches the resulting cookie to `response`.
///
/// Nothing is attached if encoding fails.
///
/// # Errors
///
/// Any error from [`FlashEncoder::encode`] or from the response's
/// [`AttachCookie`] implementation.
///
/// # Examples
///
/// ```
/// use flash_core::web::{attach_flash, ResponseAdapter};
/// use flash_core::{Flash, FlashEncoder};
///
/// let mut response = ResponseAdapter::see_other("/comments");
/// attach_flash(&mut response, &FlashEncoder::new(), &Flash::new("thanks for the post"))
///     .expect("encodes");
///
/// assert!(response.set_cookies()[0].starts_with("RsFlash=thanks+for+the+post/INFO; Path=/; Expires="));
/// ```
pub fn attach_flash<R, C>(
    response: &mut R,
    encoder: &FlashEncoder<C>,
    flash: &Flash,
) -> Result<(), Error>
where
    R: AttachCookie + ?Sized,
    C: Clock,
{
    let cookie = encoder.encode(flash)?;
    response.attach_cookie(&cookie)
}

/// Outcome of reading the flash cookie on a follow-up request.
///
/// When a flash cookie was present, `clear` holds the instruction that
/// deletes it; apply it to the response so the message is shown once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashConsumption {
    /// The decoded message, if the cookie was present and well-formed
    pub flash: Option<Flash>,
    /// Instruction clearing the cookie, if one was present
    pub clear: Option<SetCookie>,
    /// Why a present cookie could not be decoded
    pub error: Option<Error>,
}

impl FlashConsumption {
    fn absent() -> Self {
        Self {
            flash: None,
            clear: None,
            error: None,
        }
    }

    /// Returns `true` if the request carried no flash cookie.
    pub fn is_absent(&self) -> bool {
        self.clear.is_none()
    }

    /// Attaches the clearing cookie, if any, to `response`.
    ///
    /// # Errors
    ///
    /// Any error from the response's [`AttachCookie`] implementation.
    pub fn apply<R>(&self, response: &mut R) -> Result<(), Error>
    where
        R: AttachCookie + ?Sized,
    {
        match &self.clear {
            Some(cookie) => response.attach_cookie(cookie),
            None => Ok(()),
        }
    }
}

/// Reads and decodes flash cookie `cookie_name` from `request`.
///
/// A malformed cookie is not fatal: it is logged, reported in
/// [`FlashConsumption::error`] and still cleared.
///
/// # Errors
///
/// Fails only if the clearing instruction cannot be built, i.e. when
/// `cookie_name` or the decoder's path is invalid.
///
/// # Examples
///
/// ```
/// use flash_core::web::{consume_flash, RequestAdapter, ResponseAdapter};
/// use flash_core::FlashDecoder;
///
/// let mut request = RequestAdapter::new("req-7".to_string());
/// request.add_cookie("RsFlash", "thanks+for+the+post/INFO");
///
/// let consumed = consume_flash(&request, "req-7", "RsFlash", &FlashDecoder::new()).unwrap();
/// assert_eq!(consumed.flash.as_ref().unwrap().text(), "thanks for the post");
///
/// let mut response = ResponseAdapter::ok("page");
/// consumed.apply(&mut response).unwrap();
/// assert!(response.set_cookies()[0].starts_with("RsFlash=;"));
/// ```
pub fn consume_flash<Q>(
    request: &Q,
    request_id: &str,
    cookie_name: &str,
    decoder: &FlashDecoder,
) -> Result<FlashConsumption, Error>
where
    Q: ExtractCookies + ?Sized,
{
    let Some(value) = request.cookie(cookie_name) else {
        return Ok(FlashConsumption::absent());
    };

    let clear = decoder.clear(cookie_name)?;

    match decoder.decode(cookie_name, &value) {
        Ok(flash) => {
            tracing::debug!(request_id, cookie = cookie_name, "flash cookie consumed");
            Ok(FlashConsumption {
                flash: Some(flash),
                clear: Some(clear),
                error: None,
            })
        }
        Err(err) => {
            FlashLog::new(request_id).malformed(cookie_name, &err.message);
            Ok(FlashConsumption {
                flash: None,
                clear: Some(clear),
                error: Some(err),
            })
        }
    }
}
