use std::sync::Arc;
use std::time::Duration;

use reclaim_adapters::{config::test, persistence::InMemoryIdentityProvider};
use reclaim_core::{DeliveryOutcome, Email, MailService, MailServiceError, TemplateModel};
use reclaim_service::RecoveryService;
use serde_json::json;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::helpers::{PASSWORD, application_info, password};

/// Mail service that never finishes sending, so requests stay in flight.
#[derive(Clone)]
struct StallingMailService {
    entered: Arc<Notify>,
}

#[async_trait::async_trait]
impl MailService for StallingMailService {
    async fn send(
        &self,
        _recipient: &Email,
        _subject: &str,
        _template_name: &str,
        _model: TemplateModel,
    ) -> Result<DeliveryOutcome, MailServiceError> {
        self.entered.notify_one();
        std::future::pending().await
    }
}

#[tokio::test]
async fn shutdown_answers_in_flight_requests_before_stopping() {
    let identity_provider = InMemoryIdentityProvider::default();
    identity_provider
        .add_account(
            Email::try_from("ursula@example.com").unwrap(),
            "ursula",
            password(PASSWORD),
        )
        .await
        .unwrap();

    let entered = Arc::new(Notify::new());
    let shutdown = CancellationToken::new();
    let service = RecoveryService::new(
        identity_provider,
        StallingMailService {
            entered: entered.clone(),
        },
        application_info(),
        shutdown.clone(),
    );

    let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
        .await
        .unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(service.run_standalone(listener, None));

    let request = tokio::spawn(async move {
        reqwest::Client::new()
            .post(format!("{address}/forgot-password"))
            .json(&json!({ "email": "ursula@example.com" }))
            .send()
            .await
    });

    entered.notified().await;
    shutdown.cancel();

    let response = request
        .await
        .unwrap()
        .expect("In-flight request was dropped during shutdown");
    assert_eq!(response.status().as_u16(), 503);

    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("Server did not stop after shutdown")
        .unwrap()
        .unwrap();
}
