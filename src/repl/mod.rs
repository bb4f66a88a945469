//! REPL Module
//!
//! The interactive command loop: prompt, read, dispatch, repeat.

mod commands;

pub use commands::{CommandSpec, COMMANDS};

use std::collections::HashMap;
use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::client::PokeApiClient;
use crate::error::Result;
use crate::models::Pokemon;

/// Prompt printed before each command.
const PROMPT: &str = "Pokedex > ";

// == Repl ==
/// REPL session state: the API client, pagination cursors for the
/// location-area index, and the Pokemon caught so far.
pub struct Repl {
    client: PokeApiClient,
    next_page: Option<String>,
    prev_page: Option<String>,
    caught: HashMap<String, Pokemon>,
    catch_threshold: u32,
}

impl Repl {
    // == Constructor ==
    /// Creates a fresh session around `client`.
    pub fn new(client: PokeApiClient, catch_threshold: u32) -> Self {
        Self {
            client,
            next_page: None,
            prev_page: None,
            caught: HashMap::new(),
            catch_threshold,
        }
    }

    // == Run ==
    /// Runs the loop until `exit` or end of input.
    ///
    /// Command errors are printed and the loop continues; only a stdin
    /// read failure propagates.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{PROMPT}");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                // EOF: behave like exit
                println!();
                break;
            };

            let args: Vec<&str> = line.split_whitespace().collect();
            let Some(&name) = args.first() else {
                continue;
            };

            debug!(command = name, "dispatching");
            match self.dispatch(name, &args).await {
                Ok(true) => break,
                Ok(false) => {}
                Err(err) => println!("{err}"),
            }
        }

        Ok(())
    }

    // == Dispatch ==
    /// Routes one parsed command line. Returns `Ok(true)` when the
    /// session should end.
    async fn dispatch(&mut self, name: &str, args: &[&str]) -> Result<bool> {
        match name {
            "help" => self.cmd_help(),
            "map" => self.cmd_map().await?,
            "mapb" => self.cmd_mapb().await?,
            "explore" => self.cmd_explore(args).await?,
            "catch" => self.cmd_catch(args).await?,
            "inspect" => self.cmd_inspect(args)?,
            "pokedex" => self.cmd_pokedex()?,
            "exit" => {
                println!("exiting program.");
                return Ok(true);
            }
            _ => println!("invalid command"),
        }
        Ok(false)
    }
}
