use serde_json::json;

use crate::helpers::{PASSWORD, TestApp, password, query_param};

#[tokio::test]
async fn emailed_link_resets_the_password() {
    let app = TestApp::new().await;
    let account = app.register("ursula@example.com").await;

    let response = app
        .post_forgot_password(&json!({ "email": "ursula@example.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let link = app.last_reset_link().await;
    let response = app
        .post_reset_password(&json!({
            "userid": query_param(&link, "userid"),
            "token": query_param(&link, "token"),
            "new_password": "correct-horse-battery"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "succeeded": true }));

    assert!(
        app.identity_provider
            .verify_password(account.id(), &password("correct-horse-battery"))
            .await
            .unwrap()
    );
    assert!(
        !app.identity_provider
            .verify_password(account.id(), &password(PASSWORD))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn reset_link_can_only_be_used_once() {
    let app = TestApp::new().await;
    app.register("ursula@example.com").await;
    app.post_forgot_password(&json!({ "email": "ursula@example.com" }))
        .await;

    let link = app.last_reset_link().await;
    let body = json!({
        "userid": query_param(&link, "userid"),
        "token": query_param(&link, "token"),
        "new_password": "correct-horse-battery"
    });

    let first = app.post_reset_password(&body).await;
    assert_eq!(first.status().as_u16(), 200);

    let second = app.post_reset_password(&body).await;
    assert_eq!(second.status().as_u16(), 400);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "succeeded": false, "message": "Invalid password reset token" })
    );
}

#[tokio::test]
async fn newer_request_invalidates_older_link() {
    let app = TestApp::new().await;
    app.register("ursula@example.com").await;

    app.post_forgot_password(&json!({ "email": "ursula@example.com" }))
        .await;
    let first_link = app.last_reset_link().await;
    app.post_forgot_password(&json!({ "email": "ursula@example.com" }))
        .await;

    let response = app
        .post_reset_password(&json!({
            "userid": query_param(&first_link, "userid"),
            "token": query_param(&first_link, "token"),
            "new_password": "correct-horse-battery"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn unknown_account_is_a_failure() {
    let app = TestApp::new().await;

    let response = app
        .post_reset_password(&json!({
            "userid": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "token": "c29tZS10b2tlbg",
            "new_password": "correct-horse-battery"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["succeeded"], false);
}

#[tokio::test]
async fn should_return_400_for_short_password() {
    let app = TestApp::new().await;
    let account = app.register("ursula@example.com").await;

    let response = app
        .post_reset_password(&json!({
            "userid": account.id().to_string(),
            "token": "c29tZS10b2tlbg",
            "new_password": "short"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("error").is_some());
}
