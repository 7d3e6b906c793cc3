use super::ui::{self, Theme};
use crate::config::Settings;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use testgen_core::storage::write_script;
use testgen_core::{Effect, Generation, Prompt, Session};
use tracing::info;

/// Drives a [`Session`] from line-based input.
pub struct App<R, W> {
    session: Session,
    settings: Settings,
    theme: Theme,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(settings: Settings, input: R, out: W) -> Self {
        let theme = Theme {
            color: settings.color,
        };
        Self {
            session: Session::new(settings.escape),
            settings,
            theme,
            input,
            out,
        }
    }

    /// Run until the user quits or input ends. Returns the number of scripts
    /// generated. A failed save ends the loop with an error.
    pub fn run(&mut self) -> Result<u32> {
        info!(
            output_dir = %self.settings.output_dir.display(),
            escape = self.settings.escape.name(),
            "session started"
        );
        ui::intro(&mut self.out, self.theme)?;
        ui::menu(&mut self.out, self.theme)?;

        while !self.session.is_finished() {
            ui::prompt(&mut self.out, self.theme, self.session.prompt())?;
            let effect = match self.read_line()? {
                Some(line) => self.session.handle_line(&line),
                None => {
                    writeln!(self.out)?;
                    self.session.end_of_input()
                }
            };
            self.render(effect)?;
            if self.session.prompt() == Prompt::Choice {
                ui::menu(&mut self.out, self.theme)?;
            }
        }

        let total = self.session.counter().value();
        info!(total, "session finished");
        Ok(total)
    }

    /// Bytes that are not UTF-8 are replaced rather than rejected, so they
    /// reach the session as an ordinary unrecognized line.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
    }

    fn render(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::ShowMenu | Effect::AskDescription | Effect::Ignored => {}
            Effect::InvalidChoice(_) => ui::invalid_choice(&mut self.out, self.theme)?,
            Effect::EmptyDescription => ui::empty_description(&mut self.out, self.theme)?,
            Effect::Generated(generation) => self.save(generation)?,
            Effect::Finished {
                total,
                after_generation,
            } => ui::goodbye(&mut self.out, self.theme, total, after_generation)?,
        }
        Ok(())
    }

    fn save(&mut self, generation: Generation) -> Result<()> {
        let Generation { number, script } = generation;
        ui::generating(&mut self.out, self.theme, &script.description, script.template)?;
        if !self.settings.delay.is_zero() {
            std::thread::sleep(self.settings.delay);
        }
        ui::script(&mut self.out, self.theme, &script.text)?;

        let path = write_script(
            &self.settings.output_dir,
            number,
            &script,
            &self.settings.extension,
        )
        .with_context(|| format!("Could not save test #{}", number))?;
        ui::saved(&mut self.out, self.theme, &path, number)?;
        Ok(())
    }
}
