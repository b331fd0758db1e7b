//! Normalized relay addresses.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// Errors that can occur while parsing a relay address.
#[derive(Debug, Error)]
pub enum RelayUrlError {
    /// The address is not an absolute, syntactically valid URL.
    #[error("Invalid relay URL: {0}")]
    Invalid(#[from] url::ParseError),
}

/// A relay address in canonical form.
///
/// Normalization lowercases the scheme and host, drops redundant default
/// ports, and serializes a bare authority with a trailing `/`. Two spellings
/// of the same relay therefore always normalize to the same string, so
/// `RelayUrl` values compare and hash by identity and are safe to use as map
/// and set keys.
///
/// Any absolute URL parses; only `wss://` addresses are considered secure
/// and eligible for selection (see [`is_secure`](Self::is_secure)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelayUrl(String);

impl RelayUrl {
    /// Parses and normalizes a relay address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not an absolute, syntactically
    /// valid URL.
    pub fn parse(address: &str) -> Result<Self, RelayUrlError> {
        let url = Url::parse(address)?;
        Ok(Self(url.to_string()))
    }

    /// Returns the normalized address string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true only for relays reachable over TLS (`wss://` scheme).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.0.starts_with("wss://")
    }
}

impl fmt::Display for RelayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RelayUrl {
    type Err = RelayUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RelayUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
