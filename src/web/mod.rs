//! Web framework integration surface.
//!
//! This module is the boundary between HTTP frameworks and flash cookies.
//! It handles:
//! - Reading the flash cookie from an incoming request
//! - Attaching `Set-Cookie` instructions to an outgoing response
//! - The set-then-clear handshake across one redirect
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: Only the `http` crate's header types
//!    appear here. Frameworks plug in through [`ExtractCookies`] and
//!    [`AttachCookie`].
//!
//! 2. **One Hop**: A flash cookie is set on one response and cleared on
//!    the next. There is no server-side store.
//!
//! 3. **Explicit Context**: No global state. Encoder, decoder and request
//!    ID are passed in as values.
//!
//! # Example Flow
//!
//! ```
//! use flash_core::web::{attach_flash, consume_flash, RequestAdapter, ResponseAdapter};
//! use flash_core::{Flash, FlashDecoder, FlashEncoder, Severity};
//!
//! // 1. POST handler redirects with a flash message
//! let mut redirect = ResponseAdapter::see_other("/comments");
//! let flash = Flash::with_level("can't save your post, sorry", Severity::Severe);
//! attach_flash(&mut redirect, &FlashEncoder::new(), &flash)?;
//!
//! // 2. The browser sends the cookie back on the next request
//! let set_cookie = redirect.set_cookies()[0];
//! let pair = set_cookie.split(';').next().unwrap();
//! let mut next = RequestAdapter::new("req-2".to_string());
//! next.add_cookie_header(pair.to_string());
//!
//! // 3. GET handler consumes and clears it
//! let consumed = consume_flash(&next, "req-2", "RsFlash", &FlashDecoder::new())?;
//! assert_eq!(consumed.flash.as_ref(), Some(&flash));
//!
//! let mut page = ResponseAdapter::ok("comments");
//! consumed.apply(&mut page)?;
//! assert!(page.set_cookies()[0].starts_with("RsFlash=; Path=/"));
//! # Ok::<(), flash_core::Error>(())
//! ```

mod adapter;
pub mod example_handler;
mod extract;
mod middleware;

pub use adapter::{RequestAdapter, ResponseAdapter};
pub use extract::{AttachCookie, ExtractCookies};
pub use middleware::{attach_flash, consume_flash, FlashConsumption};
