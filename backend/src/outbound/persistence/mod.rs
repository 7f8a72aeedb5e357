//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module; every database failure is mapped to the
//! repository's port error.
//!
//! ```no_run
//! use event_api::outbound::persistence::{DbPool, DieselEventRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), event_api::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/events")).await?;
//! let repo = DieselEventRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_account_repository;
mod diesel_basic_error_mapping;
mod diesel_event_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_event_repository::DieselEventRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
