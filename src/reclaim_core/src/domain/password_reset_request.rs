use super::email::Email;

/// A request to email a password reset link to `email`.
#[derive(Debug, Clone)]
pub struct PasswordResetRequest {
    email: Email,
}

impl PasswordResetRequest {
    pub fn new(email: Email) -> Self {
        Self { email }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}
