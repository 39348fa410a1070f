use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode, utf8_percent_encode};

use crate::model::IssuedToken;

/// Characters left as-is in query values: alphanumerics, `_.-~` and `/`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

fn quote(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, QUERY_VALUE)
}

/// Builds the URL a client is redirected to once a token was issued.
///
/// Appends `access_token`, `uid`, `user_name`, `name` and, if non-empty,
/// `email` as query parameters to `base_url`. `base_url` is taken verbatim
/// and must not carry a query string of its own.
pub fn build_redirect_url(base_url: &str, token: &IssuedToken) -> String {
    let user = token.user();

    let mut url = format!("{}/?access_token={}", base_url, quote(token.access_token()));
    url.push_str(&format!("&uid={}", quote(&user.sub)));
    url.push_str(&format!("&user_name={}", quote(&user.user_name)));
    url.push_str(&format!("&name={}", quote(&user.name)));
    if let Some(email) = user.email() {
        url.push_str(&format!("&email={}", quote(email)));
    }

    url
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::TokenUser;

    fn token(email: Option<&str>) -> IssuedToken {
        IssuedToken::new(
            "tok-en_~",
            TokenUser {
                sub: "42".into(),
                user_name: "jdoe".into(),
                name: "John Doe".into(),
                email: email.map(String::from),
            },
        )
    }

    #[test]
    fn test_redirect_url() {
        assert_eq!(
            build_redirect_url("https://x", &token(Some("a@b.com"))),
            "https://x/?access_token=tok-en_~&uid=42&user_name=jdoe&name=John%20Doe&email=a%40b.com"
        );
    }

    #[test]
    fn test_redirect_url_without_email() {
        let url = build_redirect_url("https://x", &token(Some("")));
        assert_eq!(url, "https://x/?access_token=tok-en_~&uid=42&user_name=jdoe&name=John%20Doe");
        assert!(!url.contains("email"));

        let url = build_redirect_url("https://x", &token(None));
        assert!(!url.contains("email"));
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("a/b c&d=e?f").to_string(), "a/b%20c%26d%3De%3Ff");
        assert_eq!(quote("Zoë").to_string(), "Zo%C3%AB");
        assert_eq!(quote("a+b").to_string(), "a%2Bb");
    }
}
