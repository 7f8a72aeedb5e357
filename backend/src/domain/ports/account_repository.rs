//! Driven port for account persistence.

use async_trait::async_trait;

use crate::domain::{Account, Email, NewAccount};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}",
        /// Another account already uses the address.
        DuplicateEmail { email: String } =>
            "an account already exists for {email}",
    }
}

/// Port for reading and creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find the account registered under `email`.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountRepositoryError>;

    /// Store a new account and return it with its assigned identifier.
    async fn insert(&self, account: NewAccount) -> Result<Account, AccountRepositoryError>;
}
