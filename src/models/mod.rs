//! PokeAPI Response Models
//!
//! Deserialization targets for the PokeAPI endpoints the REPL commands
//! use. Only the fields the commands display are modeled; everything
//! else in the payloads is ignored by serde.

mod locations;
mod pokemon;

// Re-export public types
pub use locations::{LocationAreaDetail, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::Deserialize;

/// A named API resource with a URL pointing at its full record.
///
/// PokeAPI uses this shape everywhere it references another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
