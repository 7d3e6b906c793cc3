//! testgen-templates - pytest/Selenium blueprints and keyword dispatch.

pub mod render;
pub mod select;
pub mod template;

pub use render::{EscapePolicy, GeneratedScript, generate, render};
pub use select::{Keyword, RULES, Rule, select, select_with};
pub use template::{PLACEHOLDER, Template};
