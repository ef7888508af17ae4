//! Scroll-driven slide deck controller.
//!
//! Responsibilities are split the same way as the page behaviors:
//! - `app`: the [`Presentation`] controller, its events and handlers.
//! - `host`: the capability interface the controller talks to.
//! - `geometry` / `transform`: pure slide math and CSS rendering.
//! - `config`: TOML/JSON configuration with markup defaults.
//! - `web` (feature `web`): the `web-sys` host and wasm entry points.

pub mod app;
pub mod config;
pub mod debounce;
pub mod geometry;
pub mod host;
pub mod telemetry;
pub mod transform;
#[cfg(feature = "web")]
pub mod web;

pub use app::{Disposition, Event, IntersectionEntry, Key, Presentation};
pub use config::DeckConfig;
pub use host::{ElementId, Host, Subscription, TimerToken};
