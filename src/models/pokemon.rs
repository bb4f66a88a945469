//! Pokemon response shapes
//!
//! The detail record fetched by `catch` and displayed by `inspect`.

use serde::Deserialize;

use super::NamedResource;

/// A Pokemon's detail record.
///
/// `base_experience` drives the catch roll; the rest is what `inspect`
/// prints. Stored in the caught map after a successful catch.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Missing for a few special forms; treated as zero
    #[serde(default)]
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

/// One base-stat line (hp, attack, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of the Pokemon's types.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    /// `type` is a keyword, hence the rename
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
