use thiserror::Error;
use tracing::error;
use tracing_error::SpanTrace;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("config error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
    #[error("token error: {0}")]
    TokenError(#[from] crate::auth::TokenError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Runs `run`, on failure the error is logged and the process exits with status 1.
pub fn run_with_error_handler<F, T>(run: F) -> T
where
    F: FnOnce() -> AppResult<T>,
{
    match run() {
        Ok(value) => value,
        Err(e) => {
            default_error_handler(e);
            std::process::exit(1);
        }
    }
}

fn default_error_handler(error: AppError) {
    let span = SpanTrace::capture();
    error!("{}\n{}", error, span);
}

pub fn log_error<E: std::error::Error + std::fmt::Display>(error: &E) {
    let span = SpanTrace::capture();
    error!("{}\n{}", error, span);
}
