use super::state::Prompt;
use crate::scenarios::SCENARIOS;

/// A raw input line translated in the context of the current prompt.
///
/// Keeps input parsing separate from session behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `Q` / `q` at the menu.
    Quit,
    /// A canned scenario, by 1-based menu number.
    Canned(usize),
    /// `0` at the menu.
    CustomEntry,
    /// Anything else at the menu.
    Invalid(String),
    /// A non-empty custom description, trimmed.
    Describe(String),
    /// Empty or whitespace-only custom description.
    EmptyDescription,
    /// `Y` / `y` at the continue prompt.
    Continue,
    /// Any other answer at the continue prompt.
    Stop,
}

impl Command {
    pub fn parse(prompt: Prompt, line: &str) -> Command {
        let input = line.trim();
        match prompt {
            Prompt::Choice => parse_choice(input),
            Prompt::CustomDescription => {
                if input.is_empty() {
                    Command::EmptyDescription
                } else {
                    Command::Describe(input.to_string())
                }
            }
            Prompt::Continue => {
                if input.eq_ignore_ascii_case("y") {
                    Command::Continue
                } else {
                    Command::Stop
                }
            }
            Prompt::Finished => Command::Stop,
        }
    }
}

fn parse_choice(input: &str) -> Command {
    if input.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }
    if input == "0" {
        return Command::CustomEntry;
    }
    // Digits only: `usize::from_str` would also take a leading '+'.
    if !input.is_empty()
        && input.bytes().all(|b| b.is_ascii_digit())
        && let Ok(number) = input.parse::<usize>()
        && (1..=SCENARIOS.len()).contains(&number)
    {
        return Command::Canned(number);
    }
    Command::Invalid(input.to_string())
}
