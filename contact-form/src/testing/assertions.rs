//! Assertion helpers for rendered contact form responses

use axum_test::TestResponse;

/// Assert the number of visible `data-testid="error"` elements
///
/// # Panics
///
/// Panics if the count differs
pub fn assert_error_count(response: &TestResponse, expected: usize) {
    let body = response.text();
    let actual = body.matches(r#"data-testid="error""#).count();
    assert_eq!(
        actual, expected,
        "Expected {expected} visible errors, got {actual} in:\n{body}"
    );
}

/// Assert that an error message is shown for a field
///
/// # Panics
///
/// Panics if no error element for `field` contains `message`
pub fn assert_field_error(response: &TestResponse, field: &str, message: &str) {
    let body = response.text();
    let marker = format!(r#"data-field="{field}" role="alert">{message}</p>"#);
    assert!(
        body.contains(&marker),
        "Expected error '{message}' for {field} in:\n{body}"
    );
}

/// Assert that a summary element shows the given text
///
/// # Panics
///
/// Panics if the `data-testid` element is missing or has different text
pub fn assert_display(response: &TestResponse, test_id: &str, expected: &str) {
    let body = response.text();
    let marker = format!(r#"<p data-testid="{test_id}">{expected}</p>"#);
    assert!(
        body.contains(&marker),
        "Expected {test_id} to read '{expected}' in:\n{body}"
    );
}

/// Assert that no message is shown in the summary
///
/// # Panics
///
/// Panics if a `messageDisplay` element is present
pub fn assert_no_message_display(response: &TestResponse) {
    let body = response.text();
    assert!(
        !body.contains(r#"data-testid="messageDisplay""#),
        "Expected no message display in:\n{body}"
    );
}

/// Assert that the response contains an HX-Trigger header with the expected event
///
/// # Panics
///
/// Panics if the header is missing or doesn't contain the event
pub fn assert_hx_trigger(response: &TestResponse, expected_event: &str) {
    let header = response
        .headers()
        .get("HX-Trigger")
        .expect("HX-Trigger header not found");
    let actual = header.to_str().expect("Invalid HX-Trigger header value");
    assert!(
        actual.contains(expected_event),
        "Expected HX-Trigger to contain '{expected_event}', got '{actual}'"
    );
}
