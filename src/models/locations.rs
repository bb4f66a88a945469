//! Location-area response shapes
//!
//! Covers the paginated location-area index used by `map`/`mapb` and
//! the per-area encounter list used by `explore`.

use serde::Deserialize;

use super::NamedResource;

/// One page of the location-area index, with pagination cursors.
///
/// `next` and `previous` are fully-qualified URLs for the adjacent
/// pages, exactly as the API returns them; the REPL feeds them back
/// unmodified on the next `map`/`mapb`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area's detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One Pokemon that can be encountered in an area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
