//! Portal HTTP client
//!
//! Typed client for the authentication API consumed by the login front-end,
//! together with the request/response types shared with it.

pub mod client;
pub mod types;

pub use client::{PortalClient, PortalClientBuilder, error::ClientError};
pub use types::{AuthUser, ExpiresIn, LoginRequest, LoginResponse};
