//! Matchers hold configuration only and can be shared across threads.

use std::sync::Arc;
use std::thread;

use matchers::{Matcher, ResponseMatcher, is_api_error_response_with_status};
use test_support::{json_error, validation_response};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn matchers_are_send_and_sync() {
    assert_send_sync::<ResponseMatcher>();
    assert_send_sync::<matchers::ExceptionMatcher>();
}

#[test]
fn concurrent_evaluations_do_not_interfere() {
    test_support::init_tracing();
    let matcher = Arc::new(
        is_api_error_response_with_status(422).with_error_message(1, "json", "/a", "m"),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                let code = if i % 2 == 0 { 1 } else { 2 };
                let actual = validation_response([json_error(code, "/a", "m")]);
                (i % 2 == 0, matcher.matches(&actual))
            })
        })
        .collect();

    for handle in handles {
        let (expected, matched) = handle.join().expect("thread finished");
        assert_eq!(expected, matched);
    }
}
