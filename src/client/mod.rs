//! Client Module
//!
//! Cache-first HTTP access to the PokeAPI.

mod pokeapi;

pub use pokeapi::{PokeApiClient, DEFAULT_BASE_URL};
