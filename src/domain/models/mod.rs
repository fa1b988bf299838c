pub mod credential;
pub mod identifier;
