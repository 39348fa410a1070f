mod entropy;
pub use entropy::{EntropySource, OsEntropy};
mod token;
pub use token::{
    generate_base64_token, generate_base64_token_with, generate_hex_token,
    generate_hex_token_with, sanitize_base64,
};
mod hash;
pub use hash::{hash_sha256, hash_sha256_value};
mod scope;
pub use scope::is_subset;
mod error;
pub use error::{TokenError, TokenResult};
