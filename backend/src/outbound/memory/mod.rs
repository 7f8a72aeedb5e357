//! Process-local adapters used when no database is configured.
//!
//! State lives behind a `std::sync::Mutex` that is released before any
//! `.await`, so the adapters are safe to share across actix workers. Data
//! does not survive a restart.

mod account_repository;
mod event_repository;

pub use account_repository::InMemoryAccountRepository;
pub use event_repository::InMemoryEventRepository;
