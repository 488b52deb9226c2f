use reclaim_adapters::{
    config::test, email::MockMailService, persistence::InMemoryIdentityProvider,
};
use reclaim_application::ApplicationInfo;
use reclaim_core::{Account, Email, Password, recovery_password};
use reclaim_service::RecoveryService;
use secrecy::Secret;
use tokio_util::sync::CancellationToken;

pub const APPLICATION_URL: &str = "https://app.example.com";
pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub identity_provider: InMemoryIdentityProvider,
    pub mail_service: MockMailService,
}

impl TestApp {
    pub async fn new() -> Self {
        let identity_provider = InMemoryIdentityProvider::default();
        let mail_service = MockMailService::new();

        let service = RecoveryService::new(
            identity_provider.clone(),
            mail_service.clone(),
            application_info(),
            CancellationToken::new(),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let _ = tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            identity_provider,
            mail_service,
        }
    }

    pub async fn register(&self, email: &str) -> Account {
        self.identity_provider
            .add_account(
                Email::try_from(email).unwrap(),
                "ursula",
                password(PASSWORD),
            )
            .await
            .expect("Failed to register account")
    }

    pub async fn post_forgot_password(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/forgot-password", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_reset_password(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/reset-password", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Reset link of the most recent recovery email.
    pub async fn last_reset_link(&self) -> reqwest::Url {
        let mail = self
            .mail_service
            .last_mail()
            .await
            .expect("No email was sent");
        let link = mail
            .model
            .get(recovery_password::REQUEST_URL)
            .expect("Recovery email carries no link");
        reqwest::Url::parse(link).unwrap()
    }
}

pub fn application_info() -> ApplicationInfo {
    ApplicationInfo {
        application_url: APPLICATION_URL.to_string(),
        app_name: "Reclaim".to_string(),
        company: "Acme Corp".to_string(),
    }
}

pub fn password(value: &str) -> Password {
    Password::try_from(Secret::new(value.to_string())).unwrap()
}

pub fn query_param(url: &reqwest::Url, name: &str) -> String {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| panic!("Link has no {name} parameter"))
}
