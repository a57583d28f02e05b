//! `statefetch` is an async HTTP client wrapper for JSON APIs.
//!
//! The crate decorates the standard verbs with three cross-cutting behaviors:
//! - shared loading-state tracking ([`StatefetchClient::is_loading`])
//! - bounded automatic retry on failure (`retry` in [`ClientOptions`])
//! - caching of the most recent payload ([`StatefetchClient::last_data_pulled`])

mod adapter;
mod client;
mod decode;
mod error;
mod options;
mod state;
mod types;

pub use client::StatefetchClient;
pub use error::StatefetchError;
pub use options::{AuthScheme, CallOptions, ClientOptions};
pub use types::ApiResponse;

pub type Result<T> = std::result::Result<T, StatefetchError>;
