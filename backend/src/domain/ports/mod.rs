//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`EventCommand`, `EventQuery`, `AccountLookup`) are what
//! inbound adapters call. Driven ports (`EventRepository`,
//! `AccountRepository`) are what persistence adapters implement; each
//! exposes a typed error enum instead of a catch-all error.

mod macros;
pub(crate) use macros::define_port_error;

mod account_lookup;
mod account_repository;
mod event_command;
mod event_query;
mod event_repository;

#[cfg(test)]
pub use account_lookup::MockAccountLookup;
pub use account_lookup::AccountLookup;
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
#[cfg(test)]
pub use event_command::MockEventCommand;
pub use event_command::EventCommand;
#[cfg(test)]
pub use event_query::MockEventQuery;
pub use event_query::EventQuery;
#[cfg(test)]
pub use event_repository::MockEventRepository;
pub use event_repository::{EventRepository, EventRepositoryError};
