use color_eyre::eyre::Result;
use reclaim::{
    CancellationToken, InMemoryIdentityProvider, MockMailService, PostmarkMailService,
    RecoveryService,
    adapters::config::{MailProvider, Settings},
};
use reqwest::Client as HttpClient;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;

    let identity_provider =
        InMemoryIdentityProvider::new(settings.identity.reset_token_lifetime());
    let application = settings.application.application_info();
    let allowed_origins = Some(settings.application.allowed_origins.clone());
    let shutdown = CancellationToken::new();

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;

    let server = match settings.email_client.provider {
        MailProvider::Postmark => {
            let http_client = HttpClient::builder()
                .timeout(settings.email_client.timeout())
                .build()?;

            let mail_service = PostmarkMailService::new(
                settings.email_client.base_url.clone(),
                settings.email_client.sender()?,
                settings.email_client.auth_token.clone(),
                http_client,
            );

            RecoveryService::new(identity_provider, mail_service, application, shutdown.clone())
                .run_standalone(listener, allowed_origins)
        }
        MailProvider::Mock => {
            tracing::warn!("Recovery emails are recorded in memory, not delivered");

            RecoveryService::new(
                identity_provider,
                MockMailService::new(),
                application,
                shutdown.clone(),
            )
            .run_standalone(listener, allowed_origins)
        }
    };

    let shutdown_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested, cancelling in-flight requests");
            shutdown_signal.cancel();
        }
    });

    // Resolves after the graceful shutdown has drained open connections
    server.await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
