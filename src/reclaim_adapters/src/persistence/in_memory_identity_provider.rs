use std::collections::HashMap;
use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, distr::Alphanumeric};
use reclaim_core::{
    Account, AccountId, Email, IdentityProvider, IdentityProviderError, Password, ResetToken,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

const RESET_TOKEN_LENGTH: usize = 32;

struct StoredAccount {
    account: Account,
    password_hash: Secret<String>,
    pending_reset: Option<PendingReset>,
}

struct PendingReset {
    token: Secret<String>,
    issued_at: DateTime<Utc>,
}

/// Identity provider keeping accounts in process memory.
///
/// Reset tokens are random, single-use and expire after the configured
/// lifetime. Issuing a new token replaces any token still pending.
#[derive(Clone)]
pub struct InMemoryIdentityProvider {
    accounts: Arc<RwLock<HashMap<AccountId, StoredAccount>>>,
    token_lifetime: Duration,
}

impl InMemoryIdentityProvider {
    pub fn new(token_lifetime: Duration) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            token_lifetime,
        }
    }

    #[tracing::instrument(name = "Adding account to identity provider", skip_all)]
    pub async fn add_account(
        &self,
        email: Email,
        username: impl Into<String>,
        password: Password,
    ) -> Result<Account, IdentityProviderError> {
        let password_hash = compute_password_hash(password)
            .await
            .map_err(IdentityProviderError::UnexpectedError)?;

        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|stored| stored.account.email() == &email) {
            return Err(IdentityProviderError::AccountAlreadyExists);
        }

        let account = Account::new(AccountId::new(), email, username);
        accounts.insert(
            *account.id(),
            StoredAccount {
                account: account.clone(),
                password_hash,
                pending_reset: None,
            },
        );
        Ok(account)
    }

    /// Checks `candidate` against the stored password of the account.
    #[tracing::instrument(name = "Verifying account password", skip(self, candidate))]
    pub async fn verify_password(
        &self,
        account_id: &AccountId,
        candidate: &Password,
    ) -> Result<bool, IdentityProviderError> {
        let expected = {
            let accounts = self.accounts.read().await;
            let stored = accounts
                .get(account_id)
                .ok_or(IdentityProviderError::AccountNotFound)?;
            stored.password_hash.clone()
        };

        Ok(verify_password_hash(expected, candidate.clone()).await.is_ok())
    }
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new(Duration::hours(24))
    }
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn find_account_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Account>, IdentityProviderError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|stored| stored.account.email() == email)
            .map(|stored| stored.account.clone()))
    }

    #[tracing::instrument(name = "Issuing password reset token", skip_all)]
    async fn generate_password_reset_token(
        &self,
        account: &Account,
    ) -> Result<ResetToken, IdentityProviderError> {
        let token = generate_token();

        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(account.id())
            .ok_or(IdentityProviderError::AccountNotFound)?;
        stored.pending_reset = Some(PendingReset {
            token: token.clone(),
            issued_at: Utc::now(),
        });

        Ok(ResetToken::new(token))
    }

    #[tracing::instrument(name = "Redeeming password reset token", skip(self, token, new_password))]
    async fn reset_password(
        &self,
        account_id: &AccountId,
        token: &ResetToken,
        new_password: Password,
    ) -> Result<(), IdentityProviderError> {
        {
            let accounts = self.accounts.read().await;
            let stored = accounts
                .get(account_id)
                .ok_or(IdentityProviderError::AccountNotFound)?;
            self.check_pending_reset(stored.pending_reset.as_ref(), token)?;
        }

        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(IdentityProviderError::UnexpectedError)?;

        // No lock is held while hashing; the token may have been replaced meanwhile.
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(account_id)
            .ok_or(IdentityProviderError::AccountNotFound)?;
        self.check_pending_reset(stored.pending_reset.as_ref(), token)?;

        stored.password_hash = password_hash;
        stored.pending_reset = None;
        Ok(())
    }
}

impl InMemoryIdentityProvider {
    fn check_pending_reset(
        &self,
        pending: Option<&PendingReset>,
        token: &ResetToken,
    ) -> Result<(), IdentityProviderError> {
        let pending = pending.ok_or(IdentityProviderError::InvalidToken)?;
        if pending.token.expose_secret() != token.as_ref().expose_secret() {
            return Err(IdentityProviderError::InvalidToken);
        }
        if Utc::now() - pending.issued_at > self.token_lifetime {
            return Err(IdentityProviderError::TokenExpired);
        }
        Ok(())
    }
}

fn generate_token() -> Secret<String> {
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RESET_TOKEN_LENGTH)
        .map(char::from)
        .collect();
    Secret::new(token)
}

fn argon2_hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();
    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            argon2_hasher()?
                .verify_password(
                    password_candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();
    tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt = SaltString::generate(&mut rand_core::OsRng);
            argon2_hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|hash| Secret::new(hash.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?
}
