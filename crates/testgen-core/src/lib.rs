//! testgen-core - UI-agnostic session state machine + script storage.

pub mod error;
pub mod scenarios;
pub mod session;
pub mod storage;

pub use error::{Result, TestgenError};
pub use scenarios::{SCENARIOS, scenario};
pub use session::{Command, Effect, Generation, Prompt, RunCounter, Session, State};

pub use testgen_templates::{EscapePolicy, GeneratedScript, Template};
