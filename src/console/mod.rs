//! Interactive console front-end.
//!
//! The session state machine lives in `testgen_core`; this module only reads
//! lines, feeds them to the session and renders the resulting effects.

mod app;
mod ui;

pub use app::App;
