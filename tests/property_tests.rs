//! Property tests for the flash cookie encoding.
//!
//! These validate the encode/decode contract and the cookie-safety of
//! every emitted value across arbitrary Unicode input.

use std::time::{Duration, UNIX_EPOCH};

use flash_core::codec::{decode_text, encode_text, is_cookie_value};
use flash_core::web::{consume_flash, RequestAdapter};
use flash_core::{FixedClock, Flash, FlashDecoder, FlashEncoder, Severity};
use proptest::prelude::*;

// Strategy: any severity, including valid custom tags
fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Severe),
        Just(Severity::Warning),
        Just(Severity::Info),
        Just(Severity::Config),
        Just(Severity::Fine),
        Just(Severity::Finer),
        Just(Severity::Finest),
        prop::string::string_regex("[A-Za-z0-9_-]{1,12}")
            .unwrap()
            .prop_map(|name| Severity::custom(name).unwrap()),
    ]
}

// Strategy: valid cookie names
fn arb_cookie_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_.-]{0,15}").unwrap()
}

proptest! {
    /// Property: decode(encode(text, level)) == (text, level)
    #[test]
    fn proptest_round_trip(
        text in any::<String>(),
        severity in arb_severity(),
        name in arb_cookie_name(),
    ) {
        let encoder = FlashEncoder::new();
        let flash = Flash::with_cookie(text, severity, name);

        let cookie = encoder.encode(&flash).unwrap();
        let back = FlashDecoder::new().decode(cookie.name(), cookie.value()).unwrap();

        prop_assert_eq!(back, flash);
    }

    /// Property: every emitted value is made of cookie-octets with exactly one raw '/'
    #[test]
    fn proptest_value_is_cookie_safe(text in any::<String>(), severity in arb_severity()) {
        let cookie = Flash::with_level(text, severity.clone()).to_cookie().unwrap();
        let value = cookie.value();

        prop_assert!(is_cookie_value(value), "not cookie-safe: {:?}", value);
        prop_assert_eq!(value.matches('/').count(), 1);
        let expected_suffix = format!("/{}", severity.name());
        prop_assert!(value.ends_with(&expected_suffix));
    }

    /// Property: identical inputs at the same instant give identical cookies
    #[test]
    fn proptest_deterministic(
        text in any::<String>(),
        severity in arb_severity(),
        secs in 0u64..4_000_000_000,
    ) {
        let encoder = FlashEncoder::new().with_clock(FixedClock::new(UNIX_EPOCH + Duration::from_secs(secs)));
        let flash = Flash::with_level(text, severity);

        let a = encoder.encode(&flash).unwrap();
        let b = encoder.encode(&flash).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.expires(), UNIX_EPOCH + Duration::from_secs(secs + 3600));
    }

    /// Property: the text codec alone is lossless and never emits spaces
    #[test]
    fn proptest_text_codec_lossless(text in any::<String>()) {
        let encoded = encode_text(&text);
        prop_assert!(!encoded.contains(' '));
        prop_assert_eq!(decode_text(&encoded).unwrap(), text);
    }

    /// Property: the reader never panics on arbitrary cookie values
    #[test]
    fn proptest_consume_never_panics(value in "[!-~]{0,40}") {
        let mut request = RequestAdapter::new("req-prop".to_string());
        request.add_cookie("RsFlash", &value);

        let consumed = consume_flash(&request, "req-prop", "RsFlash", &FlashDecoder::new()).unwrap();

        // Present cookies are always cleared, decoded or not
        prop_assert!(consumed.clear.is_some());
        prop_assert!(consumed.flash.is_some() != consumed.error.is_some());
    }
}
