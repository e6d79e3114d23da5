//! Integration tests for the contact form flow
//!
//! Drives the router the way the browser does: field change events followed
//! by a submit, checking the rendered errors and summary.

use axum_test::{TestResponse, TestServer};
use contact_form::prelude::*;

struct Harness {
    server: TestServer,
    state: AppState,
    id: FormId,
}

impl Harness {
    fn new() -> Self {
        let state = AppState::new();
        let id = state.forms().create();
        let server = TestServer::new(router(state.clone())).unwrap();
        Self { server, state, id }
    }

    async fn change(&self, field: &str, value: &str) -> TestResponse {
        self.server
            .post(&format!("{}/fields/{field}", self.id.base_path()))
            .form(&[(field, value)])
            .await
    }

    async fn submit(&self, first: &str, last: &str, email: &str, message: &str) -> TestResponse {
        let values = FormValues {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            message: message.into(),
        };
        self.server
            .post(&format!("{}/submit", self.id.base_path()))
            .form(&values)
            .await
    }

    fn form(&self) -> ContactForm {
        self.state.forms().get(self.id).unwrap()
    }
}

fn error_count(response: &TestResponse) -> usize {
    response.text().matches(r#"data-testid="error""#).count()
}

fn has_error(response: &TestResponse, field: &str, message: &str) -> bool {
    response
        .text()
        .contains(&format!(r#"data-field="{field}" role="alert">{message}</p>"#))
}

#[tokio::test]
async fn short_first_name_shows_one_error() {
    let harness = Harness::new();

    let response = harness.change("firstName", "Bill").await;

    response.assert_status_ok();
    assert_eq!(error_count(&response), 1);
    assert!(has_error(
        &response,
        "firstName",
        "firstName must be at least 5 characters"
    ));
}

#[tokio::test]
async fn cleared_first_name_is_required() {
    let harness = Harness::new();

    harness.change("firstName", "Albus").await;
    let response = harness.change("firstName", "").await;

    assert!(has_error(&response, "firstName", "firstName is required"));
}

#[tokio::test]
async fn valid_field_change_clears_slot() {
    let harness = Harness::new();

    harness.change("firstName", "Bill").await;
    let response = harness.change("firstName", "Albus").await;

    assert_eq!(error_count(&response), 0);
    assert_eq!(
        response.text(),
        r#"<div id="firstName-error" class="form-error-slot"></div>"#
    );
}

#[tokio::test]
async fn message_change_reaches_form() {
    let harness = Harness::new();

    let response = harness.change("message", "Hello there").await;

    response.assert_status_ok();
    assert_eq!(
        response.text(),
        r#"<div id="message-error" class="form-error-slot"></div>"#
    );
    assert_eq!(harness.form().values().message, "Hello there");

    let page = harness.server.get(&harness.id.base_path()).await;
    assert!(page.text().contains(">Hello there</textarea>"));
}

#[tokio::test]
async fn rejected_resubmit_returns_to_editing() {
    let harness = Harness::new();

    harness.submit("Darth", "Revan", "revan@sith.org", "").await;
    let response = harness.submit("", "", "", "").await;

    assert_eq!(error_count(&response), 3);
    assert!(response.text().contains("First Name: Darth"));

    let state = harness
        .server
        .get(&format!("{}/state", harness.id.base_path()))
        .await;
    let json: serde_json::Value = state.json();
    assert_eq!(json["phase"], "editing");
}

#[tokio::test]
async fn email_without_at_sign_is_invalid() {
    let harness = Harness::new();

    let response = harness.change("email", "Yoda").await;

    assert!(has_error(
        &response,
        "email",
        "email must be a valid email address"
    ));
}

#[tokio::test]
async fn field_change_only_touches_that_field() {
    let harness = Harness::new();

    harness.change("firstName", "Bill").await;
    harness.change("email", "luke@rebellion.org").await;

    let form = harness.form();
    assert_eq!(form.errors().len(), 1);
    assert!(form.errors().has_field_error(Field::FirstName));
}

#[tokio::test]
async fn empty_submit_shows_three_errors() {
    let harness = Harness::new();

    let response = harness.submit("", "", "", "").await;

    response.assert_status_ok();
    assert_eq!(error_count(&response), 3);
    assert!(!response.text().contains("You Submitted:"));
    assert_eq!(harness.form().phase(), FormPhase::Editing);
}

#[tokio::test]
async fn missing_email_is_the_only_error() {
    let harness = Harness::new();

    let response = harness.submit("Albus", "Dumbledore", "", "").await;

    assert_eq!(error_count(&response), 1);
    assert!(has_error(&response, "email", "email is required"));
}

#[tokio::test]
async fn missing_last_name_is_the_only_error() {
    let harness = Harness::new();

    let response = harness
        .submit("Albus", "", "Dumbledore@hogwarts.edu", "")
        .await;

    assert_eq!(error_count(&response), 1);
    assert!(has_error(&response, "lastName", "lastName is a required field"));
}

#[tokio::test]
async fn rejected_submit_keeps_values() {
    let harness = Harness::new();

    let response = harness
        .submit("Albus", "", "Dumbledore@hogwarts.edu", "")
        .await;

    assert!(response.text().contains(r#"value="Albus""#));
    assert_eq!(harness.form().values().email, "Dumbledore@hogwarts.edu");
}

#[tokio::test]
async fn summary_without_message() {
    let harness = Harness::new();

    let response = harness.submit("Darth", "Revan", "revan@sith.org", "").await;
    let body = response.text();

    assert_eq!(error_count(&response), 0);
    assert!(body.contains(r#"<p data-testid="firstnameDisplay">First Name: Darth</p>"#));
    assert!(body.contains(r#"<p data-testid="lastnameDisplay">Last Name: Revan</p>"#));
    assert!(body.contains(r#"<p data-testid="emailDisplay">Email: revan@sith.org</p>"#));
    assert!(!body.contains(r#"data-testid="messageDisplay""#));
}

#[tokio::test]
async fn summary_with_message() {
    let harness = Harness::new();
    let message = "Who I am is not important, my message is.";

    let response = harness
        .submit("Darth", "Revan", "revan@sith.org", message)
        .await;

    assert!(response
        .text()
        .contains(&format!(r#"<p data-testid="messageDisplay">Message: {message}</p>"#)));
}

#[tokio::test]
async fn accepted_submit_resets_inputs() {
    let harness = Harness::new();

    harness.submit("Darth", "Revan", "revan@sith.org", "").await;

    let form = harness.form();
    assert_eq!(form.phase(), FormPhase::Submitted);
    assert_eq!(form.values(), &FormValues::default());
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn summary_survives_later_edits() {
    let harness = Harness::new();

    harness.submit("Darth", "Revan", "revan@sith.org", "").await;
    harness.change("firstName", "Bill").await;

    let form = harness.form();
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.submitted().unwrap().first_name, "Darth");

    let response = harness.server.get(&harness.id.base_path()).await;
    assert!(response.text().contains("First Name: Darth"));
}

#[tokio::test]
async fn state_endpoint_reports_errors() {
    let harness = Harness::new();

    harness.change("email", "Yoda").await;
    let response = harness
        .server
        .get(&format!("{}/state", harness.id.base_path()))
        .await;

    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["values"]["email"], "Yoda");
    assert_eq!(json["errors"]["email"]["code"], "email");
    assert_eq!(json["phase"], "editing");
    assert!(json["submitted"].is_null());
}
