use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Value object representing a hashed password
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Scheme encoded in the hash prefix, if recognised
    pub fn scheme(&self) -> Option<HashScheme> {
        HashScheme::detect(&self.0)
    }
}

// the encoded salt and digest stay out of logs
impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scheme() {
            Some(scheme) => write!(f, "HashedPassword({scheme}, ..)"),
            None => f.write_str("HashedPassword(<unrecognised>)"),
        }
    }
}

/// Adaptive hash algorithm a credential was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashScheme {
    #[default]
    Bcrypt,
    Argon2,
}

impl HashScheme {
    const BCRYPT_PREFIXES: [&'static str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];
    const ARGON2_PREFIX: &'static str = "$argon2";

    /// Detect the scheme from the modular-crypt / PHC prefix of an encoded hash
    pub fn detect(encoded: &str) -> Option<Self> {
        if Self::BCRYPT_PREFIXES
            .iter()
            .any(|prefix| encoded.starts_with(prefix))
        {
            Some(Self::Bcrypt)
        } else if encoded.starts_with(Self::ARGON2_PREFIX) {
            Some(Self::Argon2)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt",
            Self::Argon2 => "argon2",
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashScheme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            _ => Err(DomainError::UnknownScheme(s.to_string())),
        }
    }
}
