//! Error types for reword-core.
//!
//! Only configuration errors ever reach a caller of the pipeline. The
//! analyzer, store and fetcher errors are logged where they occur and turned
//! into "no substitution" for the affected word.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by a grammatical analyzer for a single token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The token has no letters to work with.
    #[error("token {0:?} contains no words")]
    Empty(String),

    /// The analyzer could not make sense of the token.
    #[error("cannot analyze {word:?}: {reason}")]
    Unrecognized {
        /// The offending token.
        word: String,
        /// Why the analyzer gave up.
        reason: &'static str,
    },
}

/// Result type alias using [`AnalyzerError`].
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Errors from a synonym store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O failed at {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A stored record could not be encoded or decoded.
    #[error("corrupt store entry {path}: {source}")]
    Serde {
        /// The entry's file.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the lexical API client.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the body could not be read.
    #[error("request for {lemma:?} failed: {source}")]
    Request {
        /// The lemma being looked up.
        lemma: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("lookup of {lemma:?} returned HTTP {status}")]
    Status {
        /// The lemma being looked up.
        lemma: String,
        /// The response status code.
        status: u16,
    },

    /// The response body did not match the provider's format.
    #[error("unexpected response for {lemma:?}: {source}")]
    Decode {
        /// The lemma being looked up.
        lemma: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Result type alias using [`FetchError`].
pub type FetchResult<T> = Result<T, FetchError>;
