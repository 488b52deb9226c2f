use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenEncodingError {
    #[error("Token is not valid base64url")]
    InvalidBase64,
    #[error("Token is not valid UTF-8")]
    InvalidUtf8,
}

/// Opaque password reset credential issued by the identity provider.
#[derive(Debug, Clone)]
pub struct ResetToken(Secret<String>);

impl ResetToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }

    /// Encodes the raw UTF-8 bytes of the token with the base64url alphabet,
    /// without padding, so it can travel as a query-string value.
    pub fn to_url_safe(&self) -> UrlSafeToken {
        UrlSafeToken(URL_SAFE_NO_PAD.encode(self.0.expose_secret().as_bytes()))
    }
}

impl AsRef<Secret<String>> for ResetToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for ResetToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for ResetToken {}

/// A [`ResetToken`] in its link-embeddable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSafeToken(String);

impl UrlSafeToken {
    /// Wraps an encoded token received from a reset link. The value is not
    /// decoded until [`UrlSafeToken::decode`] is called.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn decode(&self) -> Result<ResetToken, TokenEncodingError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(self.0.as_bytes())
            .map_err(|_| TokenEncodingError::InvalidBase64)?;
        let token = String::from_utf8(bytes).map_err(|_| TokenEncodingError::InvalidUtf8)?;
        Ok(ResetToken::new(Secret::new(token)))
    }
}
