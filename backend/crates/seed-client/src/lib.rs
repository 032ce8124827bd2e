//! seed-client library
//!
//! HTTP client for the hosted backend: the auth admin API and the REST data API.

mod client;
mod error;


pub use client::{AUTH_ADMIN_USERS_PATH, REST_PATH, SupabaseClient};
pub use error::{ClientError, Result as ClientResult};
