use argon2::{
    Argon2, Params, PasswordHash as Argon2Hash,
    password_hash::{PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::{
    error::DomainError,
    models::credential::{HashScheme, HashedPassword},
    services::password_service::PasswordHasher,
};

/// Ceilings for parameters read from a stored hash. Anything above them is
/// refused before the memory is allocated.
pub const MAX_VERIFY_M_COST: u32 = 64 * 1024;
pub const MAX_VERIFY_T_COST: u32 = 8;
pub const MAX_VERIFY_P_COST: u32 = 4;

/// Argon2id with the crate's default parameters, encoded as a PHC string
#[derive(Clone, Debug)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn scheme(&self) -> HashScheme {
        HashScheme::Argon2
    }

    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        if plain_password.is_empty() {
            return Err(DomainError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|e| DomainError::HashingFailed(e.to_string()))?
            .to_string();

        Ok(HashedPassword::new(hash))
    }

    fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> bool {
        let parsed_hash = match Argon2Hash::new(hashed_password.as_str()) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "unparsable argon2 hash treated as mismatch");
                return false;
            }
        };

        let params = match Params::try_from(&parsed_hash) {
            Ok(params) => params,
            Err(e) => {
                tracing::debug!(error = %e, "argon2 hash with invalid params treated as mismatch");
                return false;
            }
        };
        if params.m_cost() > MAX_VERIFY_M_COST
            || params.t_cost() > MAX_VERIFY_T_COST
            || params.p_cost() > MAX_VERIFY_P_COST
        {
            tracing::debug!(
                m_cost = params.m_cost(),
                t_cost = params.t_cost(),
                p_cost = params.p_cost(),
                "argon2 hash above verification limits treated as mismatch"
            );
            return false;
        }

        Argon2::default()
            .verify_password(plain_password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
