//! Configuration for the slide deck.
//!
//! Selectors, class names and effect tuning are grouped into TOML tables and
//! flattened into [`DeckConfig`]. Anything missing falls back to the defaults
//! in `defaults.rs`, which match the stock presentation markup.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, parse_config_json, serialize_config};
pub use models::{Banner, DeckConfig, LogLevel};
