#![allow(dead_code)]

use std::cell::Cell;

use token_service::auth::{EntropySource, OsEntropy};
use token_service::model::{IssuedToken, TokenUser};
use token_service::TokenResult;

/// Forwards to the OS source and records how many bytes were drawn.
#[derive(Debug, Default)]
pub struct CountingEntropy {
    calls: Cell<usize>,
    bytes: Cell<usize>,
}

impl CountingEntropy {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn bytes(&self) -> usize {
        self.bytes.get()
    }
}

impl EntropySource for CountingEntropy {
    fn fill(&self, buf: &mut [u8]) -> TokenResult<()> {
        self.calls.set(self.calls.get() + 1);
        self.bytes.set(self.bytes.get() + buf.len());
        OsEntropy.fill(buf)
    }
}

/// An exhausted entropy pool.
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill(&self, _buf: &mut [u8]) -> TokenResult<()> {
        Err(getrandom::Error::UNSUPPORTED.into())
    }
}

/// Always yields the same byte.
pub struct FixedEntropy(pub u8);

impl EntropySource for FixedEntropy {
    fn fill(&self, buf: &mut [u8]) -> TokenResult<()> {
        buf.fill(self.0);
        Ok(())
    }
}

pub fn issued_token(access_token: &str, email: Option<&str>) -> IssuedToken {
    IssuedToken::new(
        access_token,
        TokenUser {
            sub: "a1b2-c3".into(),
            user_name: "jane.doe".into(),
            name: "Jane Doe".into(),
            email: email.map(String::from),
        },
    )
}
