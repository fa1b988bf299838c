use std::str::FromStr;

use bcrypt::HashParts;

use crate::domain::{
    error::DomainError,
    models::credential::{HashScheme, HashedPassword},
    services::password_service::PasswordHasher,
};

/// Cost factor used for every new bcrypt hash
pub const DEFAULT_COST: u32 = 12;

/// bcrypt only consumes the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Highest cost a stored hash may name before verification refuses it,
/// unless the hasher itself is configured above it
pub const MAX_VERIFY_COST: u32 = DEFAULT_COST;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

#[derive(Clone, Debug)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Result<Self, DomainError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(DomainError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn scheme(&self) -> HashScheme {
        HashScheme::Bcrypt
    }

    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        if plain_password.is_empty() {
            return Err(DomainError::EmptyPassword);
        }
        if plain_password.len() > MAX_PASSWORD_BYTES {
            return Err(DomainError::PasswordTooLong {
                len: plain_password.len(),
                max: MAX_PASSWORD_BYTES,
            });
        }

        let hash = bcrypt::hash(plain_password.as_bytes(), self.cost)
            .map_err(|e| DomainError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword::new(hash))
    }

    fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> bool {
        // a longer candidate would be truncated and could match on its prefix
        if plain_password.len() > MAX_PASSWORD_BYTES {
            return false;
        }

        let stored_cost = match HashParts::from_str(hashed_password.as_str()) {
            Ok(parts) => parts.get_cost(),
            Err(e) => {
                tracing::debug!(error = %e, "unparsable bcrypt hash treated as mismatch");
                return false;
            }
        };
        if stored_cost > self.cost.max(MAX_VERIFY_COST) {
            tracing::debug!(stored_cost, "bcrypt hash above verification cost treated as mismatch");
            return false;
        }

        // bcrypt compares the decoded digests in constant time
        match bcrypt::verify(plain_password.as_bytes(), hashed_password.as_str()) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::debug!(error = %e, "unparsable bcrypt hash treated as mismatch");
                false
            }
        }
    }
}
