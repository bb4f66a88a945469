//! Pokedex CLI - an interactive Pokedex backed by the PokeAPI
//!
//! Provides a timed in-memory response cache, a cache-first API client,
//! and a REPL over the PokeAPI location and Pokemon endpoints.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;

pub use cache::TimedCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use repl::Repl;
