//! Builders wiring repositories into the services behind the HTTP state.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use event_api::domain::ports::{AccountLookup, AccountRepository, EventRepository};
use event_api::domain::{
    Account, AccountRole, AccountService, Email, Error, EventService, PlainPassword,
};
use event_api::inbound::http::state::HttpState;
use event_api::outbound::memory::{InMemoryAccountRepository, InMemoryEventRepository};
use event_api::outbound::persistence::{DbPool, DieselAccountRepository, DieselEventRepository};

/// Services shared by every worker.
#[derive(Clone)]
pub struct Services {
    /// Ports handed to the HTTP handlers.
    pub http_state: HttpState,
    /// Account lookup for seeding and credential checks.
    pub accounts: Arc<dyn AccountLookup>,
}

fn services_over<E, A>(events: Arc<E>, accounts: Arc<A>) -> Services
where
    E: EventRepository + 'static,
    A: AccountRepository + 'static,
{
    let event_service = Arc::new(EventService::new(events));
    Services {
        http_state: HttpState::new(event_service.clone(), event_service),
        accounts: Arc::new(AccountService::new(accounts)),
    }
}

/// Build services over Diesel repositories when a pool is available,
/// otherwise over process-local stores.
pub fn build_services(pool: Option<&DbPool>) -> Services {
    match pool {
        Some(pool) => services_over(
            Arc::new(DieselEventRepository::new(pool.clone())),
            Arc::new(DieselAccountRepository::new(pool.clone())),
        ),
        None => {
            info!("no database configured; using in-memory stores");
            services_over(
                Arc::new(InMemoryEventRepository::new()),
                Arc::new(InMemoryAccountRepository::new()),
            )
        }
    }
}

/// Ensure the administrator account exists with both `USER` and `ADMIN`
/// roles. An existing account is left untouched.
///
/// # Errors
/// Returns `invalid_request` for a malformed address or empty password and
/// propagates repository failures from the lookup port.
pub async fn seed_admin(
    accounts: &dyn AccountLookup,
    email: &str,
    password: &str,
) -> Result<Account, Error> {
    let email = Email::new(email)
        .map_err(|err| Error::invalid_request(format!("invalid admin email: {err}")))?;
    let password = PlainPassword::new(password)
        .map_err(|err| Error::invalid_request(format!("invalid admin password: {err}")))?;
    let roles = HashSet::from([AccountRole::User, AccountRole::Admin]);
    let account = accounts.ensure_account(email, password, roles).await?;
    info!(account_id = %account.id(), "administrator account ready");
    Ok(account)
}
