use super::command::Command;
use super::ops::{Effect, step};
use testgen_templates::EscapePolicy;

/// Number of scripts generated so far in this session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunCounter(u32);

impl RunCounter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The counter after one more generation.
    pub fn advance(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for RunCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The prompt the session is blocked on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Prompt {
    /// Main menu: `1`-`5`, `0` or `Q`.
    #[default]
    Choice,
    /// Free-text description after choosing `0`.
    CustomDescription,
    /// "Generate another test? (Y/N)".
    Continue,
    /// Terminal.
    Finished,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub prompt: Prompt,
    pub counter: RunCounter,
}

/// Owns the session state and the escape policy used for every generation.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: State,
    escape: EscapePolicy,
}

impl Session {
    pub fn new(escape: EscapePolicy) -> Self {
        Self {
            state: State::default(),
            escape,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn prompt(&self) -> Prompt {
        self.state.prompt
    }

    pub fn counter(&self) -> RunCounter {
        self.state.counter
    }

    pub fn escape(&self) -> EscapePolicy {
        self.escape
    }

    pub fn is_finished(&self) -> bool {
        self.state.prompt == Prompt::Finished
    }

    pub fn apply(&mut self, command: Command) -> Effect {
        let (next, effect) = step(self.state, command, self.escape);
        self.state = next;
        effect
    }

    /// Translate a raw input line for the current prompt and apply it.
    pub fn handle_line(&mut self, line: &str) -> Effect {
        let command = Command::parse(self.state.prompt, line);
        self.apply(command)
    }

    /// Input closed: finish from whichever prompt we are on.
    pub fn end_of_input(&mut self) -> Effect {
        let command = match self.state.prompt {
            Prompt::Continue => Command::Stop,
            _ => Command::Quit,
        };
        self.apply(command)
    }
}
