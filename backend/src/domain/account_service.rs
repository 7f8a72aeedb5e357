//! Account lookup service.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{AccountLookup, AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountRole, Email, Error, NewAccount, PasswordHash, PlainPassword};

fn map_repository_error(error: AccountRepositoryError) -> Error {
    debug!(%error, "account repository call failed");
    match error {
        AccountRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("account repository unavailable: {message}"))
        }
        AccountRepositoryError::Query { message } => {
            Error::internal(format!("account repository error: {message}"))
        }
        AccountRepositoryError::DuplicateEmail { email } => {
            Error::internal(format!("account for {email} was created concurrently"))
        }
    }
}

/// Account service implementing [`AccountLookup`].
#[derive(Clone)]
pub struct AccountService<R> {
    account_repo: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service over the account repository.
    pub fn new(account_repo: Arc<R>) -> Self {
        Self { account_repo }
    }
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    async fn lookup(&self, email: &Email) -> Result<Option<Account>, Error> {
        self.account_repo
            .find_by_email(email)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> AccountLookup for AccountService<R>
where
    R: AccountRepository,
{
    async fn find_by_email(&self, email: &Email) -> Result<Account, Error> {
        self.lookup(email)
            .await?
            .ok_or_else(|| Error::not_found("account not found"))
    }

    async fn verify_credentials(
        &self,
        email: &Email,
        password: &PlainPassword,
    ) -> Result<Account, Error> {
        match self.lookup(email).await? {
            Some(account) if account.password().verify(password) => Ok(account),
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }

    async fn ensure_account(
        &self,
        email: Email,
        password: PlainPassword,
        roles: HashSet<AccountRole>,
    ) -> Result<Account, Error> {
        if let Some(existing) = self.lookup(&email).await? {
            debug!(account_id = %existing.id(), "account already present");
            return Ok(existing);
        }

        let account = self
            .account_repo
            .insert(NewAccount {
                email,
                password: PasswordHash::hash(&password),
                roles,
            })
            .await
            .map_err(map_repository_error)?;
        info!(account_id = %account.id(), "account created");
        Ok(account)
    }
}
