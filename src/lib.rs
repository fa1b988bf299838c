//! Credential hashing for the TWOL web application.
//!
//! - [`hash_password`] / [`verify_password`]: salted bcrypt (cost 12) hashes,
//!   with Argon2 hashes also accepted on verification.
//! - [`derive_identifier`]: deterministic `TWOL_<digits>` fingerprints (cyrb53).
//!   Not a cryptographic hash.
//!
//! The async variants live on [`usecase::credential_usecase::CredentialUsecase`].

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod usecase;

use crate::{
    domain::{
        error::DomainError, models::credential::HashedPassword,
        services::password_service::PasswordHasher,
    },
    infrastructure::{
        bcrypt_password_hasher::BcryptPasswordHasher,
        scheme_password_hasher::SchemePasswordHasher,
    },
};

pub use crate::domain::{
    models::identifier::DerivedIdentifier,
    services::identifier_service::{DEFAULT_SEED, cyrb53, derive_identifier},
};

/// Hash `plain_password` with bcrypt at the default cost and a fresh salt
pub fn hash_password(plain_password: &str) -> Result<String, DomainError> {
    BcryptPasswordHasher::new()
        .hash(plain_password)
        .map(HashedPassword::into_string)
}

/// Check `plain_password` against a stored hash; malformed hashes never match
pub fn verify_password(plain_password: &str, hashed: &str) -> bool {
    let hashed = HashedPassword::new(hashed.to_string());
    SchemePasswordHasher::default().verify(plain_password, &hashed)
}
