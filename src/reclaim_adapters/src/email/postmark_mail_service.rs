use reclaim_core::{DeliveryOutcome, Email, MailService, MailServiceError, TemplateModel};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::templates::render_template;

/// Delivers templated emails through the Postmark HTTP API.
///
/// Templates are rendered locally; Postmark only sees the final body.
#[derive(Clone)]
pub struct PostmarkMailService {
    http_client: Client,
    base_url: String,
    sender: Email,
    authorization_token: Secret<String>,
}

impl PostmarkMailService {
    pub fn new(
        base_url: String,
        sender: Email,
        authorization_token: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }
}

#[async_trait::async_trait]
impl MailService for PostmarkMailService {
    #[tracing::instrument(name = "Sending email", skip_all, fields(template = %template_name))]
    async fn send(
        &self,
        recipient: &Email,
        subject: &str,
        template_name: &str,
        model: TemplateModel,
    ) -> Result<DeliveryOutcome, MailServiceError> {
        let content = match render_template(template_name, &model) {
            Ok(content) => content,
            Err(e) => return Ok(DeliveryOutcome::failed([e.to_string()])),
        };

        let base =
            Url::parse(&self.base_url).map_err(|e| MailServiceError::Unavailable(e.to_string()))?;
        let url = base
            .join("/email")
            .map_err(|e| MailServiceError::Unavailable(e.to_string()))?;

        let request_body = SendEmailRequest {
            from: self.sender.as_ref().expose_secret(),
            to: recipient.as_ref().expose_secret(),
            subject,
            html_body: &content.html,
            text_body: &content.text,
            message_stream: MESSAGE_STREAM,
        };

        let response = match self
            .http_client
            .post(url)
            .header(
                POSTMARK_AUTH_HEADER,
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(DeliveryOutcome::failed([e.to_string()])),
        };

        let status = response.status();
        if status.is_success() {
            return Ok(DeliveryOutcome::delivered());
        }

        let message = match response.json::<PostmarkErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => status.to_string(),
        };
        tracing::warn!(%status, %message, "Postmark rejected email");

        Ok(DeliveryOutcome::failed([message]))
    }
}

const MESSAGE_STREAM: &str = "outbound";
const POSTMARK_AUTH_HEADER: &str = "X-Postmark-Server-Token";

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
    message_stream: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct PostmarkErrorResponse {
    message: String,
}
