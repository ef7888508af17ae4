pub mod dispatch;
mod messages;
mod state;
mod update;

pub use messages::{Disposition, Event, IntersectionEntry, Key};
pub use state::Presentation;
