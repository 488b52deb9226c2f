//! Email bodies rendered with askama.

use askama::Template;
use reclaim_core::{TemplateModel, recovery_password};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown email template {0}")]
    UnknownTemplate(String),
    #[error("Missing template variable {0}")]
    MissingVariable(&'static str),
    #[error("Failed to render template: {0}")]
    Render(String),
}

/// HTML and plain-text bodies of one email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub html: String,
    pub text: String,
}

#[derive(Template)]
#[template(path = "recovery_password.html")]
pub struct RecoveryPasswordTemplate<'a> {
    pub request_url: &'a str,
    pub app_name: &'a str,
    pub company: &'a str,
    pub user_name: &'a str,
    pub email: &'a str,
}

#[derive(Template)]
#[template(path = "recovery_password.txt")]
pub struct RecoveryPasswordTextTemplate<'a> {
    pub request_url: &'a str,
    pub app_name: &'a str,
    pub company: &'a str,
    pub user_name: &'a str,
    pub email: &'a str,
}

/// Renders the template registered under `template_name` with the variables
/// of `model`.
pub fn render_template(
    template_name: &str,
    model: &TemplateModel,
) -> Result<RenderedEmail, TemplateError> {
    let var = |key: &'static str| model.get(key).ok_or(TemplateError::MissingVariable(key));

    match template_name {
        recovery_password::TEMPLATE_NAME => {
            let html = RecoveryPasswordTemplate {
                request_url: var(recovery_password::REQUEST_URL)?,
                app_name: var(recovery_password::APP_NAME)?,
                company: var(recovery_password::COMPANY)?,
                user_name: var(recovery_password::USER_NAME)?,
                email: var(recovery_password::EMAIL)?,
            };
            let text = RecoveryPasswordTextTemplate {
                request_url: html.request_url,
                app_name: html.app_name,
                company: html.company,
                user_name: html.user_name,
                email: html.email,
            };

            Ok(RenderedEmail {
                html: html.render().map_err(render_error)?,
                text: text.render().map_err(render_error)?,
            })
        }
        other => Err(TemplateError::UnknownTemplate(other.to_string())),
    }
}

fn render_error(error: askama::Error) -> TemplateError {
    TemplateError::Render(error.to_string())
}
