//! Session state and transitions (UI-agnostic).

mod command;
mod ops;
mod state;

pub use command::Command;
pub use ops::{Effect, Generation, generate_once, step};
pub use state::{Prompt, RunCounter, Session, State};
