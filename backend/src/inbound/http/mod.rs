//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod events;
pub mod events_dto;
pub mod health;
pub mod links;
pub mod schemas;
pub mod state;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// JSON extractor configuration shared by every body-accepting handler.
///
/// Malformed bodies, unknown fields, and wrongly typed values become
/// `invalid_request` errors with the usual error envelope.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}
