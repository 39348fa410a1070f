//! Secure token primitives for the token issuing service: random hex and
//! base64 tokens, URL sanitizing, hashing, scope checks and redirect URLs.

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod auth;
pub use auth::{
    TokenError, TokenResult, generate_base64_token, generate_hex_token, hash_sha256,
    hash_sha256_value, is_subset, sanitize_base64,
};

pub mod error;
pub mod model;
pub mod utils;
pub use utils::socket::is_socket_file;
pub mod web;
pub use web::build_redirect_url;

static APPLICATION_NAME: &str = "token-service";

/// Installs the global tracing subscriber. Call once, at start-up.
pub fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}

#[doc(hidden)]
pub use tracing as __tracing;
