//! Driving port for account lookup.
//!
//! An external security layer resolves logins through this port; the HTTP
//! surface itself exposes no account endpoints.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{Account, AccountRole, Email, Error, PlainPassword};

/// Driving port for finding and seeding accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// Fetch the account registered under `email`.
    ///
    /// Fails with `not_found` ("account not found") when none exists.
    async fn find_by_email(&self, email: &Email) -> Result<Account, Error>;

    /// Fetch the account for `email` if `password` matches its hash.
    ///
    /// Unknown addresses and wrong passwords both fail with
    /// `unauthorized`.
    async fn verify_credentials(
        &self,
        email: &Email,
        password: &PlainPassword,
    ) -> Result<Account, Error>;

    /// Return the account for `email`, creating it when missing.
    ///
    /// An existing account is returned unchanged.
    async fn ensure_account(
        &self,
        email: Email,
        password: PlainPassword,
        roles: HashSet<AccountRole>,
    ) -> Result<Account, Error>;
}
