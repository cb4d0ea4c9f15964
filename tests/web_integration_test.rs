//! Integration tests for the web module.
//!
//! These tests walk the full post/redirect/get cycle: a POST handler sets a
//! flash cookie, the "browser" sends it back, the GET handler shows and
//! clears it, and a further GET no longer sees it.

use std::collections::HashMap;

use flash_core::web::example_handler::{handle_post_comment, handle_show_comments};
use flash_core::web::{
    attach_flash, consume_flash, AttachCookie, ExtractCookies, RequestAdapter, ResponseAdapter,
};
use flash_core::{Flash, FlashDecoder, FlashEncoder, Severity};
use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

/// A tiny cookie jar standing in for the browser.
#[derive(Default)]
struct Browser {
    jar: HashMap<String, String>,
    next_id: u32,
}

impl Browser {
    /// Applies every `Set-Cookie` of a response to the jar.
    fn receive(&mut self, response: &ResponseAdapter) {
        for header in response.set_cookies() {
            let pair = header.split(';').next().unwrap();
            let (name, value) = pair.split_once('=').unwrap();
            let expired = header.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT");
            if expired {
                self.jar.remove(name);
            } else {
                self.jar.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Builds the next request carrying the jar's cookies.
    fn request(&mut self) -> RequestAdapter {
        self.next_id += 1;
        let mut request = RequestAdapter::new(format!("req-{:03}", self.next_id));
        if !self.jar.is_empty() {
            let line = self
                .jar
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            request.add_cookie_header(line);
        }
        request
    }
}

#[test]
fn post_redirect_get_shows_message_once() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let encoder = FlashEncoder::new();
    let decoder = encoder.decoder();
    let mut browser = Browser::default();

    // 1. POST sets the flash and redirects
    let post = browser.request();
    let redirect = handle_post_comment(&post, "first!", &encoder).expect("post succeeds");
    assert_eq!(redirect.status().as_u16(), 303);
    browser.receive(&redirect);
    assert!(browser.jar.contains_key("RsFlash"));

    // 2. GET renders the message and clears the cookie
    let get = browser.request();
    let page = handle_show_comments(&get, &decoder).expect("get succeeds");
    assert_eq!(page.body(), "[INFO] thanks for the post\ncomments");
    browser.receive(&page);
    assert!(!browser.jar.contains_key("RsFlash"));

    // 3. A further GET sees nothing
    let again = browser.request();
    let page = handle_show_comments(&again, &decoder).expect("get succeeds");
    assert_eq!(page.body(), "comments");
    assert!(page.set_cookies().is_empty());
}

#[test]
fn rejected_post_shows_severe_message() {
    let encoder = FlashEncoder::new();
    let mut browser = Browser::default();

    let post = browser.request();
    let redirect = handle_post_comment(&post, "", &encoder).unwrap();
    browser.receive(&redirect);

    let page = handle_show_comments(&browser.request(), &encoder.decoder()).unwrap();
    assert_eq!(
        page.body(),
        "[SEVERE] can't save an empty post, sorry\ncomments"
    );
}

#[test]
fn other_cookies_are_left_alone() {
    let mut browser = Browser::default();
    browser.jar.insert("sid".to_string(), "abc123".to_string());

    let redirect = handle_post_comment(&browser.request(), "hello", &FlashEncoder::new()).unwrap();
    browser.receive(&redirect);
    let page = handle_show_comments(&browser.request(), &FlashDecoder::new()).unwrap();
    browser.receive(&page);

    assert_eq!(browser.jar.get("sid").map(String::as_str), Some("abc123"));
    assert!(!browser.jar.contains_key("RsFlash"));
}

#[test]
fn custom_cookie_name_round_trip() {
    let encoder = FlashEncoder::new();
    let flash = Flash::with_cookie("saved", Severity::custom("SUCCESS").unwrap(), "Notice");

    let mut redirect = ResponseAdapter::see_other("/");
    attach_flash(&mut redirect, &encoder, &flash).unwrap();
    let pair = redirect.set_cookies()[0].split(';').next().unwrap().to_string();

    let mut request = RequestAdapter::new("req-custom".to_string());
    request.add_cookie_header(pair);

    // The default name finds nothing
    let none = consume_flash(&request, "req-custom", "RsFlash", &FlashDecoder::new()).unwrap();
    assert!(none.is_absent());

    let some = consume_flash(&request, "req-custom", "Notice", &FlashDecoder::new()).unwrap();
    assert_eq!(some.flash, Some(flash));
}

#[test]
fn header_map_round_trip() {
    let encoder = FlashEncoder::new();
    let flash = Flash::with_level("über / 100% done", Severity::Warning);

    let mut response_headers = HeaderMap::new();
    attach_flash(&mut response_headers, &encoder, &flash).unwrap();

    let set_cookie = response_headers
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let pair = set_cookie.split(';').next().unwrap();

    let mut request_headers = HeaderMap::new();
    request_headers.insert(COOKIE, HeaderValue::from_str(pair).unwrap());
    assert!(request_headers.cookie("RsFlash").is_some());

    let consumed =
        consume_flash(&request_headers, "req-hm", "RsFlash", &FlashDecoder::new()).unwrap();
    assert_eq!(consumed.flash, Some(flash));

    let mut next_headers = HeaderMap::new();
    consumed.apply(&mut next_headers).unwrap();
    let cleared = next_headers.get(SET_COOKIE).unwrap().to_str().unwrap();
    assert_eq!(
        cleared,
        "RsFlash=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    );
}

#[test]
fn header_map_flash_found_beside_utf8_cookie() {
    let mut request_headers = HeaderMap::new();
    let line = HeaderValue::from_bytes("name=Jörg; RsFlash=saved/INFO".as_bytes()).unwrap();
    request_headers.insert(COOKIE, line);

    let consumed =
        consume_flash(&request_headers, "req-utf8", "RsFlash", &FlashDecoder::new()).unwrap();
    assert_eq!(consumed.flash.as_ref().map(Flash::text), Some("saved"));
    assert!(consumed.clear.is_some());
}

#[test]
fn dyn_attach_cookie_is_usable() {
    let mut response = ResponseAdapter::ok("x");
    let target: &mut dyn AttachCookie = &mut response;
    attach_flash(target, &FlashEncoder::new(), &Flash::new("hi")).unwrap();
    assert_eq!(response.set_cookies().len(), 1);
}
