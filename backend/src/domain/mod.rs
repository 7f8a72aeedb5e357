//! Domain primitives, aggregates, services, and ports.
//!
//! Purpose: define strongly typed entities used by the API and persistence
//! layers, the rules that accept or reject event submissions, and the
//! services inbound adapters drive. Nothing here depends on actix-web or
//! Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Event, EventSubmission, EventPatch: the event aggregate and its inputs.
//! - `validate_submission`: cross-field event rules.
//! - Account, Email, `PasswordHash`: account identity and credentials.
//! - `EventService`, `AccountService`: implementations of the driving ports.

pub mod account;
mod account_service;
pub mod error;
pub mod event;
mod event_service;
pub mod ports;
pub mod trace_id;

pub use self::account::{
    Account, AccountId, AccountRole, Email, EmailValidationError, NewAccount, PasswordHash,
    PasswordHashError, PlainPassword, UnknownAccountRole,
};
pub use self::account_service::AccountService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::event::{
    DerivedState, Event, EventId, EventPatch, EventSortField, EventStatus, EventSubmission,
    FieldError, NewEvent, SUBMISSION_OBJECT_NAME, UnknownEventStatus, UnsortableProperty,
    ensure_sortable, validate_submission, validation_error,
};
pub use self::event_service::EventService;
pub use self::trace_id::TraceId;
