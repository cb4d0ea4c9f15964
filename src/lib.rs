//! One-shot flash messages carried across a redirect in a single cookie.
//!
//! A handler that finishes a form submission attaches a short message with a
//! severity to its redirect response. The browser carries it back on the
//! next request, where it is shown once and cleared.
//!
//! The cookie value is `<form-encoded text>/<severity name>`, set with
//! `Path=/` and an `Expires` one hour in the future.
//!
//! # Core Types
//!
//! - [`Flash`]: The message, its [`Severity`] and the cookie name
//! - [`FlashEncoder`]: Lowers a `Flash` into a [`SetCookie`] instruction
//! - [`FlashDecoder`]: Reads a flash cookie back and builds the clearing cookie
//! - [`FlashLog`]: Records consumed messages at the matching `tracing` level
//! - [`web`]: Request/response adapters and the set/consume middleware
//!
//! # Examples
//!
//! ```
//! use flash_core::{Flash, FlashDecoder, FlashEncoder, Severity};
//!
//! let flash = Flash::with_level("can't save your post, sorry", Severity::Severe);
//! let cookie = FlashEncoder::new().encode(&flash).expect("encodes");
//!
//! assert_eq!(cookie.name(), "RsFlash");
//! assert_eq!(cookie.value(), "can%27t+save+your+post%2C+sorry/SEVERE");
//! assert_eq!(cookie.path(), "/");
//!
//! let back = FlashDecoder::new().decode(cookie.name(), cookie.value()).unwrap();
//! assert_eq!(back, flash);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
pub mod codec;
mod cookie;
mod decoder;
mod encoder;
mod error;
mod flash;
mod logging;
mod severity;
pub mod web;

pub use clock::{Clock, FixedClock, SystemClock};
pub use cookie::SetCookie;
pub use decoder::FlashDecoder;
pub use encoder::{FlashEncoder, DEFAULT_PATH, DEFAULT_TTL};
pub use error::{Error, ErrorKind};
pub use flash::{Flash, DEFAULT_COOKIE_NAME};
pub use logging::FlashLog;
pub use severity::Severity;
