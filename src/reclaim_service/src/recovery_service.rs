use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::post,
};
use reclaim_adapters::{
    config::AllowedOrigins,
    http::{RecoveryState, forgot_password, reset_password},
};
use reclaim_application::ApplicationInfo;
use reclaim_core::{IdentityProvider, MailService};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// How long in-flight requests get to finish once shutdown starts
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Password recovery service exposing the forgot/reset password routes
pub struct RecoveryService {
    router: Router,
    shutdown: CancellationToken,
}

impl RecoveryService {
    /// Create a new RecoveryService with the provided identity provider and mail service
    ///
    /// # Arguments
    /// * `identity_provider` - Looks up accounts and issues reset tokens (must be Clone)
    /// * `mail_service` - Delivers the recovery email (must be Clone)
    /// * `application` - Details rendered into the recovery email
    /// * `shutdown` - Cancelled on shutdown; in-flight requests observe it and return 503
    pub fn new<I, M>(
        identity_provider: I,
        mail_service: M,
        application: ApplicationInfo,
        shutdown: CancellationToken,
    ) -> Self
    where
        I: IdentityProvider + Clone + 'static,
        M: MailService + Clone + 'static,
    {
        let state =
            RecoveryState::new(identity_provider, mail_service, application, shutdown.clone());

        let router = Router::new()
            .route("/forgot-password", post(forgot_password::<I, M>))
            .route("/reset-password", post(reset_password::<I, M>))
            .with_state(state);

        Self { router, shutdown }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the RecoveryService into a router that can be nested into another application
    ///
    /// CORS is only enabled when `allowed_origins` is given and non-empty.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the recovery service as a standalone server
    ///
    /// Returns once the shutdown token is cancelled and in-flight requests
    /// have been answered, or the grace period ran out.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let shutdown = self.shutdown.clone();
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Recovery service listening on {}", listener.local_addr()?);

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            shutdown.cancelled().await;
            tracing::info!("Shutting down recovery service");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
        });

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .handle(handle)
            .serve(router.into_make_service())
            .await
    }
}
