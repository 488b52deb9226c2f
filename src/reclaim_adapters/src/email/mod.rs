pub mod mock_mail_service;
pub mod postmark_mail_service;
pub mod templates;

pub use mock_mail_service::{MockMailService, SentMail};
pub use postmark_mail_service::PostmarkMailService;
pub use templates::{
    RecoveryPasswordTemplate, RecoveryPasswordTextTemplate, RenderedEmail, TemplateError,
    render_template,
};
