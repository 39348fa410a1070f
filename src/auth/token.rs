use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::entropy::{EntropySource, OsEntropy};
use super::error::TokenResult;

/// Returns a random lowercase hex string of exactly `length` characters. URL safe.
///
/// `length` bytes of entropy are drawn and the `2 * length` character
/// expansion is truncated, so the result carries `length / 2` bytes of entropy.
pub fn generate_hex_token(length: usize) -> TokenResult<String> {
    generate_hex_token_with(&OsEntropy, length)
}

pub fn generate_hex_token_with<S: EntropySource>(source: &S, length: usize) -> TokenResult<String> {
    let nonce = read_entropy(source, length)?;

    let mut token = hex::encode(nonce);
    token.truncate(length);
    Ok(token)
}

/// Returns a random standard base64 string of roughly `length` characters. Not URL safe.
///
/// Draws `ceil(length * 3 / 4)` bytes of entropy and encodes them with
/// padding. Unlike [`generate_hex_token`] the result is *not* truncated: it
/// is rounded up to a whole base64 block and may be up to three characters
/// longer than `length`. Callers needing an exact width must cut it down
/// themselves.
///
/// Send the output through [`sanitize_base64`] before placing it in a URL.
pub fn generate_base64_token(length: usize) -> TokenResult<String> {
    generate_base64_token_with(&OsEntropy, length)
}

pub fn generate_base64_token_with<S: EntropySource>(
    source: &S,
    length: usize,
) -> TokenResult<String> {
    let nonce = read_entropy(source, base64_entropy_len(length))?;
    Ok(STANDARD.encode(nonce))
}

/// Replaces the URL-unsafe characters of standard base64 (`+`, `/`, `=`)
/// with `-`, `_` and `~`.
///
/// The result is no longer standard base64, but it has the same length and
/// the same entropy as the input. The input is not validated.
pub fn sanitize_base64(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            '=' => '~',
            c => c,
        })
        .collect()
}

/// `ceil(length * 3 / 4)`
fn base64_entropy_len(length: usize) -> usize {
    length / 4 * 3 + (length % 4 * 3).div_ceil(4)
}

fn read_entropy<S: EntropySource>(source: &S, len: usize) -> TokenResult<Vec<u8>> {
    let mut buf = vec![0u8; len];
    source.fill(&mut buf)?;
    tracing::trace!("read {} bytes of entropy", len);
    Ok(buf)
}
