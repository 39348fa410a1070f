use serde::{Deserialize, Serialize};

/// A token handed out by the issuing layer, together with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub user: TokenUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    /// Subject identifier, exposed as `uid`.
    pub sub: String,
    pub user_name: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl IssuedToken {
    pub fn new(access_token: impl Into<String>, user: TokenUser) -> Self {
        Self {
            access_token: access_token.into(),
            user,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn user(&self) -> &TokenUser {
        &self.user
    }
}

impl TokenUser {
    /// Email address, if one is set and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}
