pub mod credential_handler;
