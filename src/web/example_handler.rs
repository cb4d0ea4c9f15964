//! Example handlers demonstrating the post/redirect/get flow with flash messages.
//!
//! **These examples are for documentation and testing only.**
//! They show the intended usage without requiring HTTP infrastructure.

use std::fmt;

use crate::clock::Clock;
use crate::error::Error;
use crate::logging::FlashLog;
use crate::{Flash, FlashDecoder, FlashEncoder, DEFAULT_COOKIE_NAME};

use super::{attach_flash, consume_flash, RequestAdapter, ResponseAdapter};

/// Where the comment handlers redirect after a POST.
pub const COMMENTS_PATH: &str = "/comments";

/// Reasons a comment cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    /// The comment body was blank
    Empty,
    /// The comment body exceeded the limit
    TooLong {
        /// Maximum accepted length in characters
        max: usize,
    },
}

impl fmt::Display for CommentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentError::Empty => write!(f, "can't save an empty post, sorry"),
            CommentError::TooLong { max } => {
                write!(f, "can't save your post, it is longer than {} characters", max)
            }
        }
    }
}

impl std::error::Error for CommentError {}

/// Longest comment [`handle_post_comment`] accepts.
pub const MAX_COMMENT_LEN: usize = 500;

/// Handles `POST /comments`.
///
/// Always answers `303 See Other` to [`COMMENTS_PATH`]. A valid comment sets
/// an `INFO` flash thanking the user; an invalid one goes through
/// [`handle_failed_post`].
///
/// # Examples
///
/// ```
/// use flash_core::web::{RequestAdapter, example_handler::handle_post_comment};
/// use flash_core::FlashEncoder;
///
/// let request = RequestAdapter::new("req-post-001".to_string());
/// let response = handle_post_comment(&request, "nice article", &FlashEncoder::new()).unwrap();
///
/// assert_eq!(response.status().as_u16(), 303);
/// assert!(response.set_cookies()[0].starts_with("RsFlash=thanks+for+the+post/INFO"));
/// ```
pub fn handle_post_comment<C: Clock>(
    request: &RequestAdapter,
    comment: &str,
    encoder: &FlashEncoder<C>,
) -> Result<ResponseAdapter, Error> {
    let comment = comment.trim();
    if comment.is_empty() {
        return handle_failed_post(request, &CommentError::Empty, encoder);
    }
    if comment.chars().count() > MAX_COMMENT_LEN {
        return handle_failed_post(
            request,
            &CommentError::TooLong {
                max: MAX_COMMENT_LEN,
            },
            encoder,
        );
    }

    tracing::info!(request_id = request.request_id(), len = comment.len(), "comment saved");

    let mut response = ResponseAdapter::see_other(COMMENTS_PATH);
    attach_flash(&mut response, encoder, &Flash::new("thanks for the post"))?;
    Ok(response)
}

/// Redirects back to [`COMMENTS_PATH`] carrying `err` as a `SEVERE` flash.
pub fn handle_failed_post<C, E>(
    request: &RequestAdapter,
    err: &E,
    encoder: &FlashEncoder<C>,
) -> Result<ResponseAdapter, Error>
where
    C: Clock,
    E: std::error::Error + ?Sized,
{
    tracing::debug!(request_id = request.request_id(), error = %err, "comment rejected");

    let mut response = ResponseAdapter::see_other(COMMENTS_PATH);
    attach_flash(&mut response, encoder, &Flash::from_error(err))?;
    Ok(response)
}

/// Handles `GET /comments`.
///
/// Renders the pending flash message, if any, as a banner line above the
/// page, logs it, and clears the cookie so it is shown only once.
///
/// # Examples
///
/// ```
/// use flash_core::web::{RequestAdapter, example_handler::handle_show_comments};
/// use flash_core::FlashDecoder;
///
/// let mut request = RequestAdapter::new("req-get-001".to_string());
/// request.add_cookie("RsFlash", "thanks+for+the+post/INFO");
///
/// let response = handle_show_comments(&request, &FlashDecoder::new()).unwrap();
/// assert!(response.body().starts_with("[INFO] thanks for the post\n"));
/// assert!(response.set_cookies()[0].starts_with("RsFlash=;"));
/// ```
pub fn handle_show_comments(
    request: &RequestAdapter,
    decoder: &FlashDecoder,
) -> Result<ResponseAdapter, Error> {
    let consumed = consume_flash(
        request,
        request.request_id(),
        DEFAULT_COOKIE_NAME,
        decoder,
    )?;

    let mut body = String::new();
    if let Some(flash) = &consumed.flash {
        FlashLog::new(request.request_id()).record(flash);
        body.push_str(&format!("[{}] {}\n", flash.severity(), flash.text()));
    }
    body.push_str("comments");

    let mut response = ResponseAdapter::ok(body);
    consumed.apply(&mut response)?;
    Ok(response)
}
