//! HTTP front end of the PokeMate name generator.
//!
//! Exposes `GET /home` and `GET /names` over actix-web. The loaded
//! `NameGenerator` is shared with every worker through `web::Data`.

/// Server configuration (bind address, model and corpus paths).
pub mod config;

/// HTTP and startup errors.
pub mod error;

/// Route handlers and their registration.
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use routes::configure;
