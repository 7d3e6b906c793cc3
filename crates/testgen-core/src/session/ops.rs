use super::command::Command;
use super::state::{Prompt, State};
use crate::error::{Result, TestgenError};
use crate::scenarios::scenario;
use testgen_templates::{EscapePolicy, GeneratedScript, generate};
use tracing::debug;

/// One successful generation, ready to be shown and saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// Counter value after this generation; used in the file name.
    pub number: u32,
    pub script: GeneratedScript,
}

/// What the front-end should do after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Back at the menu.
    ShowMenu,
    /// Ask for a custom description.
    AskDescription,
    /// Unrecognized menu token; nothing changed.
    InvalidChoice(String),
    /// Custom description was blank; nothing generated.
    EmptyDescription,
    /// A script was generated and must now be saved.
    Generated(Generation),
    /// Session over.
    Finished { total: u32, after_generation: bool },
    /// Command does not apply to the current prompt.
    Ignored,
}

/// Pure transition: current state plus a command gives the next state and
/// the effect to render.
pub fn step(state: State, command: Command, escape: EscapePolicy) -> (State, Effect) {
    let State { prompt, counter } = state;
    match (prompt, command) {
        (Prompt::Choice, Command::Quit) => (
            State {
                prompt: Prompt::Finished,
                counter,
            },
            Effect::Finished {
                total: counter.value(),
                after_generation: false,
            },
        ),
        (Prompt::Choice, Command::Canned(number)) => match scenario(number) {
            Some(description) => dispatch(state, description, escape),
            None => (state, Effect::InvalidChoice(number.to_string())),
        },
        (Prompt::Choice, Command::CustomEntry) => (
            State {
                prompt: Prompt::CustomDescription,
                counter,
            },
            Effect::AskDescription,
        ),
        (Prompt::Choice, Command::Invalid(input)) => (state, Effect::InvalidChoice(input)),
        (Prompt::CustomDescription, Command::Describe(description)) => {
            if description.trim().is_empty() {
                empty_description(state)
            } else {
                dispatch(state, &description, escape)
            }
        }
        (Prompt::CustomDescription, Command::EmptyDescription) => empty_description(state),
        (Prompt::CustomDescription, Command::Quit) => (
            State {
                prompt: Prompt::Finished,
                counter,
            },
            Effect::Finished {
                total: counter.value(),
                after_generation: false,
            },
        ),
        (Prompt::Continue, Command::Continue) => (
            State {
                prompt: Prompt::Choice,
                counter,
            },
            Effect::ShowMenu,
        ),
        (Prompt::Continue, Command::Stop) => (
            State {
                prompt: Prompt::Finished,
                counter,
            },
            Effect::Finished {
                total: counter.value(),
                after_generation: true,
            },
        ),
        (prompt, command) => {
            debug!(?prompt, ?command, "command ignored");
            (state, Effect::Ignored)
        }
    }
}

fn empty_description(state: State) -> (State, Effect) {
    (
        State {
            prompt: Prompt::Choice,
            counter: state.counter,
        },
        Effect::EmptyDescription,
    )
}

fn dispatch(state: State, description: &str, escape: EscapePolicy) -> (State, Effect) {
    let counter = state.counter.advance();
    let script = generate(description, escape);
    debug!(number = counter.value(), template = %script.template, "generated script");
    (
        State {
            prompt: Prompt::Continue,
            counter,
        },
        Effect::Generated(Generation {
            number: counter.value(),
            script,
        }),
    )
}

/// Generate a single script outside of an interactive session.
pub fn generate_once(description: &str, escape: EscapePolicy) -> Result<GeneratedScript> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TestgenError::EmptyDescription);
    }
    Ok(generate(description, escape))
}

#[cfg(test)]
mod tests {
    use super::super::{RunCounter, Session};
    use super::*;
    use crate::scenarios::SCENARIOS;
    use testgen_templates::Template;

    fn generated(effect: Effect) -> Generation {
        match effect {
            Effect::Generated(generation) => generation,
            other => panic!("expected Generated, got {:?}", other),
        }
    }

    #[test]
    fn test_quit_on_first_prompt() {
        let mut session = Session::default();
        let effect = session.handle_line("Q");
        assert_eq!(
            effect,
            Effect::Finished {
                total: 0,
                after_generation: false
            }
        );
        assert!(session.is_finished());
    }

    #[test]
    fn test_canned_choice_generates_and_asks_to_continue() {
        let mut session = Session::default();
        let generation = generated(session.handle_line("1"));
        assert_eq!(generation.number, 1);
        assert_eq!(generation.script.description, SCENARIOS[0]);
        assert_eq!(generation.script.template, Template::InvalidLogin);
        assert!(generation.script.text.contains("TestInvalidLogin"));
        assert!(generation.script.text.contains(SCENARIOS[0]));
        assert_eq!(session.prompt(), Prompt::Continue);
    }

    #[test]
    fn test_empty_custom_description_keeps_counter() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("0"), Effect::AskDescription);
        assert_eq!(session.handle_line("   "), Effect::EmptyDescription);
        assert_eq!(session.prompt(), Prompt::Choice);
        assert_eq!(session.counter(), RunCounter::new());
    }

    #[test]
    fn test_custom_description_is_trimmed() {
        let mut session = Session::default();
        session.handle_line("0");
        let generation = generated(session.handle_line("  shopping for groceries \n"));
        assert_eq!(generation.script.description, "shopping for groceries");
        assert_eq!(generation.script.template, Template::ShoppingCart);
    }

    #[test]
    fn test_invalid_choice_stays_at_menu() {
        let mut session = Session::default();
        assert_eq!(
            session.handle_line("7"),
            Effect::InvalidChoice("7".to_string())
        );
        assert_eq!(session.prompt(), Prompt::Choice);
        assert_eq!(session.counter().value(), 0);
    }

    #[test]
    fn test_counter_is_monotonic_across_generations() {
        let mut session = Session::default();
        let mut numbers = Vec::new();
        for choice in ["1", "2", "3"] {
            numbers.push(generated(session.handle_line(choice)).number);
            assert_eq!(session.handle_line("y"), Effect::ShowMenu);
            // rejected input in between must not consume a number
            session.handle_line("0");
            session.handle_line("");
            session.handle_line("x");
        }
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(
            session.handle_line("q"),
            Effect::Finished {
                total: 3,
                after_generation: false
            }
        );
    }

    #[test]
    fn test_decline_continue_finishes_after_generation() {
        let mut session = Session::default();
        session.handle_line("5");
        assert_eq!(
            session.handle_line("n"),
            Effect::Finished {
                total: 1,
                after_generation: true
            }
        );
        assert!(session.is_finished());
    }

    #[test]
    fn test_finished_ignores_input() {
        let mut session = Session::default();
        session.handle_line("q");
        assert_eq!(session.handle_line("1"), Effect::Ignored);
        assert_eq!(session.counter().value(), 0);
    }

    #[test]
    fn test_step_is_pure() {
        let state = State::default();
        let a = step(state, Command::Canned(4), EscapePolicy::Verbatim);
        let b = step(state, Command::Canned(4), EscapePolicy::Verbatim);
        assert_eq!(a, b);
        assert_eq!(state, State::default());
    }

    #[test]
    fn test_mismatched_command_is_ignored() {
        let state = State::default();
        let (next, effect) = step(state, Command::Continue, EscapePolicy::Verbatim);
        assert_eq!(next, state);
        assert_eq!(effect, Effect::Ignored);
    }

    #[test]
    fn test_generate_once_rejects_blank() {
        assert!(matches!(
            generate_once("  ", EscapePolicy::Verbatim),
            Err(TestgenError::EmptyDescription)
        ));
        let script = generate_once(" logout now ", EscapePolicy::Verbatim).unwrap();
        assert_eq!(script.template, Template::Logout);
        assert_eq!(script.description, "logout now");
    }
}
