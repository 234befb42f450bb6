//! Secret adapters

pub mod env;

pub use env::EnvSecretSource;
