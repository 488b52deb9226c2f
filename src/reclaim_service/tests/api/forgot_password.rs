use fake::{Fake, faker::internet::en::SafeEmail};
use reclaim_core::{DeliveryOutcome, recovery_password};
use secrecy::ExposeSecret;
use serde_json::json;

use crate::helpers::{APPLICATION_URL, TestApp, query_param};

#[tokio::test]
async fn should_return_200_and_send_reset_link_for_known_email() {
    let app = TestApp::new().await;
    let email: String = SafeEmail().fake();
    let account = app.register(&email).await;

    let response = app.post_forgot_password(&json!({ "email": email })).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "succeeded": true }));

    let mails = app.mail_service.sent_mails().await;
    assert_eq!(mails.len(), 1);
    let mail = &mails[0];
    assert_eq!(mail.recipient.as_ref().expose_secret(), &email);
    assert_eq!(mail.template_name, recovery_password::TEMPLATE_NAME);
    assert_eq!(mail.model.get(recovery_password::EMAIL), Some(email.as_str()));
    assert_eq!(mail.model.get(recovery_password::USER_NAME), Some("ursula"));
    assert_eq!(mail.model.get(recovery_password::APP_NAME), Some("Reclaim"));
    assert_eq!(mail.model.get(recovery_password::COMPANY), Some("Acme Corp"));

    let link = app.last_reset_link().await;
    assert!(
        link.as_str()
            .starts_with(&format!("{APPLICATION_URL}/pages/authentication/reset-password?"))
    );
    assert_eq!(query_param(&link, "userid"), account.id().to_string());
    let token = query_param(&link, "token");
    assert!(!token.contains('='));
    assert!(!token.contains('+'));
    assert!(!token.contains('/'));
}

#[tokio::test]
async fn should_return_400_when_no_account_matches() {
    let app = TestApp::new().await;
    let email: String = SafeEmail().fake();

    let response = app.post_forgot_password(&json!({ "email": email })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "succeeded": false,
            "message": "No user found by email, please contact the administrator"
        })
    );
    assert!(app.mail_service.sent_mails().await.is_empty());
}

#[tokio::test]
async fn should_return_400_with_first_delivery_error() {
    let app = TestApp::new().await;
    app.register("ursula@example.com").await;
    app.mail_service
        .set_outcome(DeliveryOutcome::failed(["Mailbox unavailable", "Try later"]))
        .await;

    let response = app
        .post_forgot_password(&json!({ "email": "ursula@example.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Mailbox unavailable, please contact the administrator"
    );
}

#[tokio::test]
async fn should_return_400_for_invalid_email() {
    let app = TestApp::new().await;

    let test_cases = ["", "ursula", "ursula@", "@example.com"];

    for email in test_cases {
        let response = app.post_forgot_password(&json!({ "email": email })).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {email:?}"
        );
    }
}

#[tokio::test]
async fn should_return_422_for_malformed_body() {
    let app = TestApp::new().await;

    let response = app.post_forgot_password(&json!({ "mail": "x" })).await;

    assert_eq!(response.status().as_u16(), 422);
}
