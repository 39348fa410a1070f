mod token;
pub use token::{IssuedToken, TokenUser};
