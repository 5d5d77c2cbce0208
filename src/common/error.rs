//! Error types for the check suite
//!
//! One variant per failure class so a failed case reports what actually
//! went wrong (transport, decoding, lookup, schema, assertion) instead of
//! a generic runtime error.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the check suite
#[derive(Error, Debug)]
pub enum Error {
    // === Transport Errors ===
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response from {url} is not valid JSON: {source}")]
    BodyDecode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // === Schema Errors ===
    #[error("Failed to read schema file '{path}': {source}")]
    SchemaRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Schema file '{path}' is not valid JSON: {source}")]
    SchemaParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema '{name}' failed to compile: {message}")]
    SchemaCompile { name: String, message: String },

    // === Lookup Errors ===
    #[error("No {entity} named '{name}' in the response")]
    LookupMiss { entity: &'static str, name: String },

    #[error("Employer search for '{text}' returned no items")]
    EmptySearch { text: String },

    // === Assertion Errors ===
    #[error("Assertion failed: {0}")]
    Assertion(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a transport error for a request
    pub fn http(url: &str, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.to_string(),
            source,
        }
    }

    /// Create a decoding error for a response body
    pub fn body_decode(url: &str, source: reqwest::Error) -> Self {
        Self::BodyDecode {
            url: url.to_string(),
            source,
        }
    }

    /// Create a lookup-miss error
    pub fn lookup_miss(entity: &'static str, name: &str) -> Self {
        Self::LookupMiss {
            entity,
            name: name.to_string(),
        }
    }
}
