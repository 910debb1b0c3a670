//! Host value object - one deployment target
//!
//! Accepts `address` or `user@address`. Ports and identities come from the
//! SSH settings, not from the host string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid host string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostParseError {
    #[error("host is empty")]
    Empty,
    #[error("host '{0}' contains whitespace")]
    Whitespace(String),
    #[error("host '{0}' has an empty user or address")]
    Malformed(String),
    #[error("host '{0}' starts with '-'")]
    LeadingDash(String),
}

/// A remote deployment target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Host {
    user: Option<String>,
    address: String,
}

impl Host {
    pub fn parse(raw: &str) -> Result<Self, HostParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(HostParseError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(HostParseError::Whitespace(raw.to_string()));
        }
        // ssh and scp would read it as an option
        if raw.starts_with('-') {
            return Err(HostParseError::LeadingDash(raw.to_string()));
        }

        match raw.split_once('@') {
            Some((user, address)) => {
                if user.is_empty() || address.is_empty() || address.contains('@') {
                    return Err(HostParseError::Malformed(raw.to_string()));
                }
                if address.starts_with('-') {
                    return Err(HostParseError::LeadingDash(raw.to_string()));
                }
                Ok(Self {
                    user: Some(user.to_string()),
                    address: address.to_string(),
                })
            }
            None => Ok(Self {
                user: None,
                address: raw.to_string(),
            }),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// SSH destination, falling back to `default_user` when the host string
    /// did not name one.
    pub fn destination(&self, default_user: Option<&str>) -> String {
        match self.user.as_deref().or(default_user) {
            Some(user) => format!("{}@{}", user, self.address),
            None => self.address.clone(),
        }
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.user {
            Some(user) => write!(f, "{}@{}", user, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

impl TryFrom<String> for Host {
    type Error = HostParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Host::parse(&value)
    }
}

impl From<Host> for String {
    fn from(host: Host) -> Self {
        host.to_string()
    }
}

impl std::str::FromStr for Host {
    type Err = HostParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Host::parse(s)
    }
}
