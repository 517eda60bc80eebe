use std::time::Duration;

use serde_json::Value;
use wiremock::{
    matchers::{any, body_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{spawn_app, spawn_app_with, API_KEY, BASE_ID, TABLE_PATH};

const THANK_YOU: &str = "Thank you for your RSVP! We look forward to seeing you.";
const GENERIC_FAILURE: &str = "Failed to submit RSVP. Please try again.";

async fn json_body(response: reqwest::Response) -> Value {
    response
        .json::<Value>()
        .await
        .expect("The response should be JSON.")
}

#[tokio::test]
async fn rsvp_returns_200_and_records_a_valid_email() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "fields": { "Email": "exec@enterprise.com" }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.airtable_server)
        .await;

    let response = app.post_rsvp(r#"{"email": "exec@enterprise.com"}"#).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "success": true, "message": THANK_YOU })
    );
}

#[tokio::test]
async fn rsvp_requires_an_email() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.airtable_server)
        .await;

    let test_cases = [
        ("{}", "missing the email"),
        (r#"{"email": null}"#, "null email"),
        (r#"{"email": ""}"#, "empty email"),
        (r#"{"email": "   "}"#, "whitespace-only email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_rsvp(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload had {}.",
            description
        );
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "success": false, "message": "Email is required" })
        );
    }
}

#[tokio::test]
async fn rsvp_rejects_malformed_emails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.airtable_server)
        .await;

    for email in ["plainaddress", "a@b", "@missinglocal.com"] {
        let body = serde_json::json!({ "email": email }).to_string();
        let response = app.post_rsvp(&body).await;

        assert_eq!(400, response.status().as_u16(), "{email} was accepted");
        assert_eq!(
            json_body(response).await["message"],
            "Please enter a valid email address"
        );
    }
}

#[tokio::test]
async fn rsvp_rejects_non_string_emails_as_malformed() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.airtable_server)
        .await;

    for body in [r#"{"email": 5}"#, r#"{"email": ["exec@enterprise.com"]}"#] {
        let response = app.post_rsvp(body).await;

        assert_eq!(400, response.status().as_u16(), "{body} was accepted");
        assert_eq!(
            json_body(response).await["message"],
            "Please enter a valid email address"
        );
    }
}

#[tokio::test]
async fn rsvp_answers_unreadable_bodies_with_a_submission_result() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.airtable_server)
        .await;

    let test_cases = [
        ("application/json", r#"{"email": "#, "truncated JSON"),
        ("application/json", r#""exec@enterprise.com""#, "a bare JSON string"),
        ("text/plain", "exec@enterprise.com", "a plain text body"),
    ];

    for (content_type, body, description) in test_cases {
        let response = app.post_raw("/api/rsvp", content_type, body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request for {}.",
            description
        );
        let body = json_body(response).await;
        assert_eq!(body["success"], false, "{description}");
        assert!(body["message"].is_string(), "{description}");
    }
}

#[tokio::test]
async fn rsvp_reports_a_configuration_error_when_any_secret_is_missing() {
    let customizations: [fn(&mut roundtable::config::Settings); 3] = [
        |config| config.airtable.api_key = None,
        |config| config.airtable.base_id = None,
        |config| config.airtable.table_name = Some(String::new()),
    ];

    for customize in customizations {
        let app = spawn_app_with(customize).await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app.airtable_server)
            .await;

        let response = app.post_rsvp(r#"{"email": "exec@enterprise.com"}"#).await;

        assert_eq!(500, response.status().as_u16());
        assert_eq!(
            json_body(response).await,
            serde_json::json!({
                "success": false,
                "message": "Server configuration error. Please contact support."
            })
        );
    }
}

#[tokio::test]
async fn rsvp_validates_the_email_before_the_configuration() {
    let app = spawn_app_with(|config| config.airtable.api_key = None).await;

    let response = app.post_rsvp(r#"{"email": "plainaddress"}"#).await;

    assert_eq!(
        json_body(response).await["message"],
        "Please enter a valid email address"
    );
}

#[tokio::test]
async fn rsvp_names_the_configured_table_when_it_does_not_exist() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({ "error": { "type": "TABLE_NOT_FOUND" } })),
        )
        .expect(1)
        .mount(&app.airtable_server)
        .await;

    let response = app.post_rsvp(r#"{"email": "exec@enterprise.com"}"#).await;

    assert_eq!(502, response.status().as_u16());
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Table \"Event Guests\" not found. Please check your table name."
    );
}

#[tokio::test]
async fn rsvp_names_the_unknown_field() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error": {
                "type": "UNKNOWN_FIELD_NAME",
                "message": "Unknown field name: \"Email\""
            }
        })))
        .expect(1)
        .mount(&app.airtable_server)
        .await;

    let response = app.post_rsvp(r#"{"email": "exec@enterprise.com"}"#).await;

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Field \"Email\" not found"));
}

#[tokio::test]
async fn rsvp_falls_back_to_a_generic_message_for_non_json_errors() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"))
        .expect(1)
        .mount(&app.airtable_server)
        .await;

    let response = app.post_rsvp(r#"{"email": "exec@enterprise.com"}"#).await;

    assert_eq!(502, response.status().as_u16());
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "success": false, "message": GENERIC_FAILURE })
    );
}

#[tokio::test]
async fn rsvp_reports_transport_failures() {
    let app = spawn_app_with(|config| config.airtable.timeout_milliseconds = Some(100)).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&app.airtable_server)
        .await;

    let response = app.post_rsvp(r#"{"email": "exec@enterprise.com"}"#).await;

    assert_eq!(502, response.status().as_u16());
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("An error occurred: "), "{message}");
    assert!(message.contains("timed out"), "{message}");
    assert!(message.ends_with(". Please try again later."), "{message}");
    assert!(!message.contains(BASE_ID), "{message}");
    assert!(!message.contains(TABLE_PATH), "{message}");
}

#[tokio::test]
async fn repeated_submissions_yield_identical_results() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.airtable_server)
        .await;

    let first = json_body(app.post_rsvp(r#"{"email": "exec@enterprise.com"}"#).await).await;
    let second = json_body(app.post_rsvp(r#"{"email": "exec@enterprise.com"}"#).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn the_form_clears_the_input_after_a_successful_submission() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.airtable_server)
        .await;

    let response = app
        .post_rsvp_form(&[("email", "exec@enterprise.com"), ("widget", "footer")])
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"id="rsvp-footer""#));
    assert!(html.contains(r#"value="""#));
    assert!(!html.contains("exec@enterprise.com"));
    assert!(html.contains(THANK_YOU));
    assert!(html.contains("rsvp-result--success"));
    // a fragment, not the whole page
    assert!(!html.contains("<html"));
}

#[tokio::test]
async fn the_form_keeps_the_input_after_a_failed_submission() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .expect(1)
        .mount(&app.airtable_server)
        .await;

    let response = app
        .post_rsvp_form(&[("email", "exec@enterprise.com"), ("widget", "hero")])
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"value="exec@enterprise.com""#));
    assert!(html.contains(GENERIC_FAILURE));
    assert!(html.contains("rsvp-result--error"));
}

#[tokio::test]
async fn the_form_without_htmx_renders_the_whole_page() {
    let app = spawn_app().await;

    let response = app
        .post_rsvp_form_without_htmx(&[("email", "plainaddress"), ("widget", "insights")])
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("<html"));
    assert!(html.contains(r#"value="plainaddress""#));
    assert!(html.contains("Please enter a valid email address"));
    // only the submitting widget shows a result
    assert_eq!(html.matches("rsvp-result--error").count(), 1);
}

#[tokio::test]
async fn the_form_answers_an_unreadable_post_with_a_failed_widget() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.airtable_server)
        .await;

    let response = app
        .post_raw("/rsvp", "application/json", r#"{"email": "exec@enterprise.com"}"#)
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"id="rsvp-hero""#));
    assert!(html.contains("rsvp-result--error"));
}
