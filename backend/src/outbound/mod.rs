//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local repositories used when no database is
//!   configured
//!
//! Adapters convert between domain types and storage representations and
//! contain no business rules.

pub mod memory;
pub mod persistence;
