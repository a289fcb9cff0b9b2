//! WASP - Wireless Asset Search Protocol
//!
//! Library side of the `wasp` CLI: queries a remote lookup service for
//! metadata associated with a mobile number and renders the result to the
//! terminal, one request at a time.
//!
//! # Modules
//!
//! - `client`: HTTP lookup client with fixed headers and timeout.
//! - `config`: explicitly constructed endpoint and pacing settings.
//! - `errors`: validation and file-access error types.
//! - `models`: identifier, lookup result, and the known-field table.
//! - `render`: banner, progress, and result rendering.
//! - `runner`: single / file / interactive processing modes.
//! - `validate`: identifier format checks.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod runner;
pub mod validate;

pub use client::LookupClient;
pub use config::Config;
pub use errors::{FileAccessError, ValidationError};
pub use models::{Identifier, LookupResult};
pub use runner::BatchRunner;
