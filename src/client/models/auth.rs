//! Authentication models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /login`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    /// Session token; absent or empty on a degenerate response
    #[serde(default)]
    pub token: Option<String>,
}

/// Authenticated session carrying the bearer token for `x-redlock-auth`.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the session holds a usable token.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
