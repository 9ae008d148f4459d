use crate::helpers::{full_lead, TestApp};
use std::time::Duration;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn contact_returns_ok_and_sends_one_email_for_a_full_lead() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "1" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&full_lead()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "ok": true }));

    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 1);
    let email = &emails[0];
    assert_eq!(email["to"], serde_json::json!([app.recipient]));
    assert_eq!(email["subject"], "New SeatAI lead — Analytical Bistro");
    let text = email["text"].as_str().unwrap();
    let html = email["html"].as_str().unwrap();
    for value in [
        "Ada Lovelace",
        "Analytical Bistro",
        "ada@bistro.example",
        "5551234567",
        "We get 200 calls a night.",
    ] {
        assert!(text.contains(value), "text body is missing {:?}", value);
        assert!(html.contains(value), "html body is missing {:?}", value);
    }
}

#[tokio::test]
async fn contact_renders_a_placeholder_for_a_missing_message() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let mut lead = full_lead();
    lead.as_object_mut().unwrap().remove("message");

    // Act
    let response = app.post_contact(&lead).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let email = &app.sent_emails().await[0];
    assert!(email["text"].as_str().unwrap().ends_with("Message: -"));
    assert!(email["html"]
        .as_str()
        .unwrap()
        .contains("<p><strong>Message:</strong><br/>-</p>"));
}

#[tokio::test]
async fn contact_forwards_incomplete_and_malformed_bodies() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;
    let test_cases = vec![
        (serde_json::json!({}), "empty object"),
        (serde_json::json!(null), "null body"),
        (serde_json::json!({ "name": 7, "phone": null }), "wrong field types"),
        (serde_json::json!({ "company": "Only Co" }), "company only"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.post_contact(&body).await;

        // Assert
        assert_eq!(
            200,
            response.status().as_u16(),
            "The API did not forward the lead when the payload was {}.",
            description
        );
    }
    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 4);
    assert_eq!(emails[0]["subject"], "New SeatAI lead");
    assert!(emails[0]["text"].as_str().unwrap().contains("Name: -"));
    assert_eq!(emails[3]["subject"], "New SeatAI lead — Only Co");
}

#[tokio::test]
async fn contact_returns_500_when_the_provider_fails() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({ "message": "Invalid `from` field." })),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&full_lead()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Failed" }));

    // the server keeps serving after the failure
    assert!(app.get_health_check().await.status().is_success());
}

#[tokio::test]
async fn contact_returns_500_when_the_provider_is_too_slow() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&full_lead()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn contact_returns_500_for_a_body_that_is_not_json() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for body in ["name=Ada&company=Bistro", "", "{\"name\": "] {
        // Act
        let response = app.post_raw_contact(body).await;

        // Assert
        assert_eq!(500, response.status().as_u16(), "body {:?}", body);
        let reply: serde_json::Value = response.json().await.unwrap();
        assert_eq!(reply, serde_json::json!({ "error": "Failed" }));
    }
}

#[tokio::test]
async fn lead_route_shares_the_contact_handler() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_json("/api/lead", &full_lead()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}
