use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

pub const ANONYMOUS_SESSION: &str = "anonymous";
const MAX_SESSION_KEY_LEN: usize = 128;

/// Partition key for per-client state such as the last recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && raw.len() <= MAX_SESSION_KEY_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(CoreError::InvalidId(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS_SESSION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
