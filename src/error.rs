//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex CLI.
///
/// Command errors are printed by the REPL and the loop continues; only
/// I/O failures on stdin end the session.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero reap interval
    #[error("cache interval must be greater than zero")]
    InvalidInterval,

    /// HTTP request failed before a response arrived
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote answered with a non-success status
    #[error("bad status code: {status} from {url}")]
    BadStatus { url: String, status: u16 },

    /// Response body was not the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading from stdin failed
    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),

    /// A command was invoked with missing or bad arguments
    #[error("{0}")]
    Usage(String),

    /// `mapb` with no previous page to go back to
    #[error("you are on the first page")]
    FirstPage,

    /// `inspect` on a Pokemon that has not been caught
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// `pokedex` with nothing caught yet
    #[error("you have not caught any pokemon")]
    EmptyPokedex,

    /// The Pokemon broke free of the catch attempt
    #[error("failed to catch {0}")]
    Escaped(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
