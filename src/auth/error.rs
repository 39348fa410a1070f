use thiserror::Error;

pub type TokenResult<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[from] getrandom::Error),
}
