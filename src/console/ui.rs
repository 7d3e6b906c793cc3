//! Console rendering for menus, prompts and results.

use crossterm::style::{Stylize, style};
use std::io::{self, Write};
use std::path::Path;
use testgen_core::{Prompt, SCENARIOS, Template};

const WIDTH: usize = 70;

/// Whether to emit ANSI styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    fn rule(&self, ch: char) -> String {
        let line = ch.to_string().repeat(WIDTH);
        if self.color {
            style(line).dark_grey().to_string()
        } else {
            line
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            style(text).cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn good(&self, text: &str) -> String {
        if self.color {
            style(text).green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn bad(&self, text: &str) -> String {
        if self.color {
            style(text).red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn ask(&self, text: &str) -> String {
        if self.color {
            style(text).yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn intro(out: &mut impl Write, theme: Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(
        out,
        "{}",
        theme.heading("  ℹ️  TEMPLATE MODE - Keyword-Based Test Generation")
    )?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(out, "Scripts are built from fixed pytest + Selenium templates,")?;
    writeln!(out, "chosen by keywords found in your test description.")?;
    writeln!(out, "{}", theme.rule('='))
}

pub fn menu(out: &mut impl Write, theme: Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(out, "{}", theme.heading("  🚀 SELENIUM TEST GENERATOR"))?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(out)?;
    writeln!(out, "📋 PRE-DEFINED TEST EXAMPLES:")?;
    writeln!(out, "{}", theme.rule('-'))?;
    for (idx, scenario) in SCENARIOS.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "  {}. {}", idx + 1, scenario)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", theme.rule('-'))?;
    writeln!(out, "  0. Enter your own custom test description")?;
    writeln!(out, "  Q. Quit program")?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(out)
}

/// Print the prompt text for `prompt` without a trailing newline.
pub fn prompt(out: &mut impl Write, theme: Theme, prompt: Prompt) -> io::Result<()> {
    let text = match prompt {
        Prompt::Choice => "👉 Enter your choice: ",
        Prompt::CustomDescription => "\n📝 Enter your test description: ",
        Prompt::Continue => "\n🔄 Generate another test? (Y/N): ",
        Prompt::Finished => return Ok(()),
    };
    write!(out, "{}", theme.ask(text))?;
    out.flush()
}

pub fn invalid_choice(out: &mut impl Write, theme: Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.bad("❌ Invalid choice! Please try again."))?;
    writeln!(out)
}

pub fn empty_description(out: &mut impl Write, theme: Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.bad("❌ Description cannot be empty!"))
}

pub fn generating(
    out: &mut impl Write,
    theme: Theme,
    description: &str,
    template: Template,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(out, "{}", theme.heading("🤖 Generating your test code..."))?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(out, "📝 Description: {}", description)?;
    writeln!(out, "🧩 Template: {}", template.name())?;
    out.flush()
}

pub fn script(out: &mut impl Write, theme: Theme, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(out, "{}", theme.good("✅ GENERATED TEST CODE:"))?;
    writeln!(out, "{}", theme.rule('='))?;
    writeln!(out)?;
    writeln!(out, "{}", text)?;
    writeln!(out)?;
    writeln!(out, "{}", theme.rule('='))
}

pub fn saved(out: &mut impl Write, theme: Theme, path: &Path, number: u32) -> io::Result<()> {
    writeln!(out, "💾 Saved to: {}", path.display())?;
    writeln!(
        out,
        "{}",
        theme.good(&format!("✅ Test #{} generated successfully!", number))
    )?;
    writeln!(out, "{}", theme.rule('='))
}

pub fn goodbye(
    out: &mut impl Write,
    theme: Theme,
    total: u32,
    after_generation: bool,
) -> io::Result<()> {
    writeln!(out)?;
    if after_generation {
        let text = format!("✅ Done! Generated {} test(s). Check your output folder.", total);
        writeln!(out, "{}", theme.good(&text))?;
    } else {
        let text = format!("👋 Goodbye! Generated {} test(s).", total);
        writeln!(out, "{}", theme.heading(&text))?;
    }
    writeln!(out)?;
    out.flush()
}
