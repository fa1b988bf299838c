use crate::domain::{
    error::DomainError,
    models::credential::{HashScheme, HashedPassword},
};

/// Service for hashing and verifying passwords
pub trait PasswordHasher: Clone {
    /// Scheme new hashes are produced with
    fn scheme(&self) -> HashScheme;

    /// Hash a plain text password with a fresh random salt
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;

    /// Verify a plain text password against a hashed password.
    ///
    /// Malformed or foreign hashes never match.
    fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> bool;
}
