use crate::domain::{
    error::DomainError,
    models::{credential::HashedPassword, identifier::DerivedIdentifier},
    services::{identifier_service, password_service::PasswordHasher},
};

/// Async entry point for the credential operations.
///
/// Hashing is CPU bound (hundreds of milliseconds at cost 12), so it runs on
/// the blocking pool instead of stalling the async workers.
pub struct CredentialUsecase<P: PasswordHasher> {
    password_hasher: P,
}

impl<P: PasswordHasher + Send + Sync + 'static> CredentialUsecase<P> {
    pub fn new(password_hasher: P) -> Self {
        Self { password_hasher }
    }

    pub async fn hash_password(&self, password: String) -> Result<HashedPassword, DomainError> {
        let hasher = self.password_hasher.clone();
        let scheme = hasher.scheme();

        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::TaskFailed(e.to_string()))??;

        tracing::debug!(%scheme, "password hashed");
        Ok(hashed)
    }

    pub async fn verify_password(&self, password: String, hashed_password: HashedPassword) -> bool {
        let hasher = self.password_hasher.clone();

        match tokio::task::spawn_blocking(move || hasher.verify(&password, &hashed_password)).await
        {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!(error = %e, "password verification task failed");
                false
            }
        }
    }

    pub fn derive_identifier(&self, input: &str, seed: Option<i32>) -> DerivedIdentifier {
        identifier_service::derive_identifier(input, seed)
    }
}
