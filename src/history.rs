//! Serialization of ui state to and from url query strings.
//!
//! The strings use the form layout with brackets for nesting
//! (`filters[author]=melville`) and percent encoding, which is what the
//! frontend router reads from and writes to the browser location.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::HuginnError;

/// Encodes a state mapping as a percent encoded url query string, without a
/// leading '?'.
pub fn stringify_query<T: Serialize>(state: &T) -> Result<String, HuginnError> {
    serde_qs::to_string(state).map_err(|e| HuginnError::StateEncoding(format!("{}", e)))
}

/// Decodes a url query string. Callers are expected to strip any leading '?'
/// beforehand, the router does it for us.
pub fn parse_query_string<T: DeserializeOwned>(query: &str) -> Result<T, HuginnError> {
    serde_qs::from_str(query).map_err(|e| HuginnError::StateParsing(format!("{}", e)))
}
