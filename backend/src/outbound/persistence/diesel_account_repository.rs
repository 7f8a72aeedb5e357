//! PostgreSQL-backed `AccountRepository` implementation using Diesel ORM.

use std::collections::HashSet;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountId, AccountRole, Email, NewAccount, PasswordHash};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Diesel-backed implementation of the account repository port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    map_basic_pool_error(error, AccountRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AccountRepositoryError {
    map_basic_diesel_error(
        error,
        AccountRepositoryError::query,
        AccountRepositoryError::connection,
    )
}

fn row_to_account(row: AccountRow) -> Result<Account, AccountRepositoryError> {
    let AccountRow {
        id,
        email,
        password_hash,
        roles,
    } = row;

    let email = Email::new(email).map_err(|err| AccountRepositoryError::query(err.to_string()))?;
    let password = PasswordHash::from_stored(&password_hash)
        .map_err(|err| AccountRepositoryError::query(err.to_string()))?;
    let roles = roles
        .iter()
        .map(|role| role.parse::<AccountRole>())
        .collect::<Result<HashSet<_>, _>>()
        .map_err(|err| AccountRepositoryError::query(err.to_string()))?;

    Ok(Account::from_new(
        AccountId::new(id),
        NewAccount {
            email,
            password,
            roles,
        },
    ))
}

fn role_names(roles: &HashSet<AccountRole>) -> Vec<String> {
    let mut names: Vec<String> = roles.iter().map(|role| role.as_str().to_owned()).collect();
    names.sort();
    names
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = accounts::table
            .filter(accounts::email.eq(email.as_str()))
            .select(AccountRow::as_select())
            .first::<AccountRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let password_hash = account.password.to_stored();
        let row = NewAccountRow {
            email: account.email.as_str(),
            password_hash: &password_hash,
            roles: role_names(&account.roles),
        };

        let id: i32 = diesel::insert_into(accounts::table)
            .values(&row)
            .returning(accounts::id)
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AccountRepositoryError::duplicate_email(account.email.as_str())
                } else {
                    map_diesel_error(err)
                }
            })?;

        Ok(Account::from_new(AccountId::new(id), account))
    }
}
