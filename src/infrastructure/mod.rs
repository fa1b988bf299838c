pub mod argon2_password_hasher;
pub mod bcrypt_password_hasher;
pub mod scheme_password_hasher;
