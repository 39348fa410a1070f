use super::error::TokenResult;

/// Source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fills `buf` completely. An empty buffer is valid and consumes nothing.
    fn fill(&self, buf: &mut [u8]) -> TokenResult<()>;
}

/// Operating system CSPRNG. Failures are not retried.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> TokenResult<()> {
        getrandom::fill(buf)?;
        Ok(())
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &S {
    fn fill(&self, buf: &mut [u8]) -> TokenResult<()> {
        (**self).fill(buf)
    }
}
