//! In-memory `AccountRepository`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountId, Email, NewAccount};

#[derive(Default)]
struct Store {
    next_id: i32,
    by_email: HashMap<Email, Account>,
}

/// Account store held in process memory, keyed by normalised email.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    store: Mutex<Store>,
}

impl InMemoryAccountRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, AccountRepositoryError> {
        self.store
            .lock()
            .map_err(|_| AccountRepositoryError::query("account store lock poisoned"))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountRepositoryError> {
        let store = self.lock()?;
        Ok(store.by_email.get(email).cloned())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut store = self.lock()?;
        if store.by_email.contains_key(&account.email) {
            return Err(AccountRepositoryError::duplicate_email(
                account.email.as_str(),
            ));
        }
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| AccountRepositoryError::query("account identifiers exhausted"))?;
        let stored = Account::from_new(AccountId::new(store.next_id), account);
        store
            .by_email
            .insert(stored.email().clone(), stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;
    use crate::domain::{AccountRole, PasswordHash, PlainPassword};

    fn new_account(email: &str) -> NewAccount {
        let password = PlainPassword::new("s3cret").expect("non-empty password");
        NewAccount {
            email: Email::new(email).expect("valid email"),
            password: PasswordHash::hash(&password),
            roles: HashSet::from([AccountRole::User]),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_ignores_email_case() {
        let repo = InMemoryAccountRepository::new();
        let stored = repo
            .insert(new_account("Admin@Example.com"))
            .await
            .expect("insert");
        assert_eq!(stored.id(), AccountId::new(1));

        let email = Email::new("admin@example.COM").expect("valid email");
        let found = repo.find_by_email(&email).await.expect("lookup");
        assert_eq!(found, Some(stored));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(new_account("a@example.com"))
            .await
            .expect("first insert");
        let err = repo
            .insert(new_account("A@example.com"))
            .await
            .expect_err("duplicate");
        assert_eq!(err, AccountRepositoryError::duplicate_email("a@example.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_email_is_absent() {
        let repo = InMemoryAccountRepository::new();
        let email = Email::new("nobody@example.com").expect("valid email");
        assert_eq!(repo.find_by_email(&email).await.expect("lookup"), None);
    }
}
