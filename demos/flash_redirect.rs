//! Post/redirect/get demonstration.
//!
//! This example walks one flash message through its whole life:
//! 1. A POST handler redirects with a flash cookie
//! 2. The browser sends the cookie back
//! 3. The GET handler renders the message and clears the cookie
//!
//! Run with: `cargo run --example flash_redirect`

use flash_core::web::example_handler::{handle_post_comment, handle_show_comments};
use flash_core::web::{RequestAdapter, ResponseAdapter};
use flash_core::{Flash, FlashEncoder, Severity};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Flash Message Example ===\n");

    let encoder = FlashEncoder::new();
    let decoder = encoder.decoder();

    // Scenario 1: successful post
    println!("--- Scenario 1: Successful post ---");
    let post = RequestAdapter::new("req-001".to_string());
    let redirect = handle_post_comment(&post, "great article", &encoder).expect("post");
    print_response(&redirect);

    let get = follow(&redirect, "req-002");
    let page = handle_show_comments(&get, &decoder).expect("get");
    print_response(&page);

    // Scenario 2: rejected post
    println!("\n--- Scenario 2: Rejected post ---");
    let post = RequestAdapter::new("req-003".to_string());
    let redirect = handle_post_comment(&post, "   ", &encoder).expect("post");
    print_response(&redirect);

    let get = follow(&redirect, "req-004");
    let page = handle_show_comments(&get, &decoder).expect("get");
    print_response(&page);

    // Scenario 3: the raw cookie for a few severities
    println!("\n--- Scenario 3: Wire format ---");
    for flash in [
        Flash::new("thanks for the post"),
        Flash::with_level("can't save your post, sorry", Severity::Severe),
        Flash::with_level("a/b", Severity::Warning),
    ] {
        match encoder.encode(&flash) {
            Ok(cookie) => println!("{:<40} -> Set-Cookie: {}", flash.to_string(), cookie),
            Err(e) => println!("{:<40} -> error: {}", flash.to_string(), e),
        }
    }
}

/// Copies the flash cookie of `response` into a new request, as a browser would.
fn follow(response: &ResponseAdapter, request_id: &str) -> RequestAdapter {
    let mut request = RequestAdapter::new(request_id.to_string());
    for header in response.set_cookies() {
        if let Some(pair) = header.split(';').next() {
            request.add_cookie_header(pair.to_string());
        }
    }
    request
}

fn print_response(response: &ResponseAdapter) {
    println!("HTTP/1.1 {}", response.status());
    for (name, value) in response.headers() {
        println!("{}: {}", name, value);
    }
    if !response.body().is_empty() {
        println!("\n{}", response.body());
    }
    println!();
}
