//! REPL Commands
//!
//! The command table (driving `help`) and the per-command handlers.

use std::time::Duration;

use rand::Rng;

use crate::error::{PokedexError, Result};

use super::Repl;

// == Command Table ==
/// A REPL command as listed by `help`.
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands, in help-display order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "display a help message",
    },
    CommandSpec {
        name: "map",
        description: "display a list of locations",
    },
    CommandSpec {
        name: "mapb",
        description: "display the previous list of locations",
    },
    CommandSpec {
        name: "explore",
        description: "explore an area for Pokemon",
    },
    CommandSpec {
        name: "catch",
        description: "try and catch a pokemon",
    },
    CommandSpec {
        name: "inspect",
        description: "inspect the pokemon's stats",
    },
    CommandSpec {
        name: "pokedex",
        description: "display the pokemon in your pokedex",
    },
    CommandSpec {
        name: "exit",
        description: "used to exit the Pokedex",
    },
];

/// Pulls the first argument after the command name or reports `what` is
/// missing.
fn required_arg<'a>(args: &[&'a str], what: &str) -> Result<&'a str> {
    args.get(1)
        .copied()
        .ok_or_else(|| PokedexError::Usage(format!("please provide {what}")))
}

// == Command Handlers ==
impl Repl {
    // == Help ==
    pub(super) fn cmd_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for command in COMMANDS {
            println!("{}: {}", command.name, command.description);
        }
    }

    // == Map ==
    /// Displays the next page of location areas and advances the
    /// pagination cursors.
    pub(super) async fn cmd_map(&mut self) -> Result<()> {
        let page = self
            .client
            .list_location_areas(self.next_page.as_deref())
            .await?;

        for location in &page.results {
            println!(" - {}", location.name);
        }

        self.next_page = page.next;
        self.prev_page = page.previous;
        Ok(())
    }

    // == Map Back ==
    /// Displays the previous page, or errors on the first one.
    pub(super) async fn cmd_mapb(&mut self) -> Result<()> {
        let Some(prev) = self.prev_page.clone() else {
            return Err(PokedexError::FirstPage);
        };

        let page = self.client.list_location_areas(Some(&prev)).await?;

        for location in &page.results {
            println!(" - {}", location.name);
        }

        self.next_page = page.next;
        self.prev_page = page.previous;
        Ok(())
    }

    // == Explore ==
    /// Lists the Pokemon that can be encountered in an area.
    pub(super) async fn cmd_explore(&mut self, args: &[&str]) -> Result<()> {
        let area = required_arg(args, "an area argument")?;

        let detail = self.client.explore_location(area).await?;
        for encounter in &detail.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }
        Ok(())
    }

    // == Catch ==
    /// Rolls against the Pokemon's base experience; on success the
    /// Pokemon lands in the pokedex.
    pub(super) async fn cmd_catch(&mut self, args: &[&str]) -> Result<()> {
        let name = required_arg(args, "a pokemon to catch")?;

        let pokemon = self.client.get_pokemon(name).await?;

        println!("You throw a pokeball at {name}");
        for dots in [".", "..", "..."] {
            println!("{dots}");
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        // stronger Pokemon (higher base experience) escape more often
        let roll = rand::thread_rng().gen_range(0..pokemon.base_experience.max(1));
        if roll > self.catch_threshold {
            return Err(PokedexError::Escaped(name.to_string()));
        }

        println!("You caught {name}!");
        self.caught.insert(pokemon.name.clone(), pokemon);
        Ok(())
    }

    // == Inspect ==
    /// Prints the stats of an already-caught Pokemon.
    pub(super) fn cmd_inspect(&self, args: &[&str]) -> Result<()> {
        let name = required_arg(args, "a pokemon to inspect")?;

        let pokemon = self
            .caught
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!("\t-{}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for kind in &pokemon.types {
            println!("\t- {}", kind.kind.name);
        }
        Ok(())
    }

    // == Pokedex ==
    /// Lists every caught Pokemon.
    pub(super) fn cmd_pokedex(&self) -> Result<()> {
        if self.caught.is_empty() {
            return Err(PokedexError::EmptyPokedex);
        }

        println!("Your Pokedex:");
        for pokemon in self.caught.values() {
            println!("\t- {}", pokemon.name);
        }
        Ok(())
    }
}
