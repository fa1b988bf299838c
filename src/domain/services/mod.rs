pub mod identifier_service;
pub mod password_service;
