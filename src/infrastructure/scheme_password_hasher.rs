use crate::{
    domain::{
        error::DomainError,
        models::credential::{HashScheme, HashedPassword},
        services::password_service::PasswordHasher,
    },
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        bcrypt_password_hasher::BcryptPasswordHasher,
    },
};

/// Hashes with one configured scheme and verifies any supported scheme,
/// dispatching on the prefix of the stored hash.
#[derive(Clone, Debug, Default)]
pub struct SchemePasswordHasher {
    preferred: HashScheme,
    bcrypt: BcryptPasswordHasher,
    argon2: Argon2PasswordHasher,
}

impl SchemePasswordHasher {
    pub fn new(preferred: HashScheme) -> Self {
        Self {
            preferred,
            ..Self::default()
        }
    }

    pub fn with_bcrypt(mut self, bcrypt: BcryptPasswordHasher) -> Self {
        self.bcrypt = bcrypt;
        self
    }
}

impl PasswordHasher for SchemePasswordHasher {
    fn scheme(&self) -> HashScheme {
        self.preferred
    }

    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        match self.preferred {
            HashScheme::Bcrypt => self.bcrypt.hash(plain_password),
            HashScheme::Argon2 => self.argon2.hash(plain_password),
        }
    }

    fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> bool {
        match hashed_password.scheme() {
            Some(HashScheme::Bcrypt) => self.bcrypt.verify(plain_password, hashed_password),
            Some(HashScheme::Argon2) => self.argon2.verify(plain_password, hashed_password),
            None => {
                tracing::debug!("hash with unknown scheme treated as mismatch");
                false
            }
        }
    }
}
