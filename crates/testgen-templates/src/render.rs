//! Placeholder substitution.

use crate::select::select;
use crate::template::{PLACEHOLDER, Template};
use std::str::FromStr;

/// How a description is transformed before it is spliced into a template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Insert the description as-is. Characters such as `"` or `{` can break
    /// the emitted Python.
    #[default]
    Verbatim,
    /// Escape for Python string literals and docstrings. Braces are doubled
    /// only where the placeholder sits inside an f-string.
    Python,
}

impl EscapePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            EscapePolicy::Verbatim => "verbatim",
            EscapePolicy::Python => "python",
        }
    }

    pub fn apply(&self, description: &str) -> String {
        match self {
            EscapePolicy::Verbatim => description.to_string(),
            EscapePolicy::Python => escape_python(description),
        }
    }
}

impl FromStr for EscapePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(EscapePolicy::Verbatim),
            "python" => Ok(EscapePolicy::Python),
            other => Err(format!(
                "unknown escape policy '{}' (expected 'verbatim' or 'python')",
                other
            )),
        }
    }
}

fn escape_python(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// A template with a description spliced in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedScript {
    pub template: Template,
    pub description: String,
    pub text: String,
}

fn double_braces(input: &str) -> String {
    input.replace('{', "{{").replace('}', "}}")
}

/// Whether the first placeholder on `line` follows an `f"` or `f'` prefix.
fn in_format_string(line: &str) -> bool {
    let Some(at) = line.find(PLACEHOLDER) else {
        return false;
    };
    let head = &line[..at];
    head.match_indices(['f', 'F']).any(|(idx, _)| {
        let opens_string = matches!(head[idx + 1..].chars().next(), Some('"' | '\''));
        let starts_token = head[..idx]
            .chars()
            .next_back()
            .is_none_or(|prev| !(prev.is_alphanumeric() || prev == '_'));
        opens_string && starts_token
    })
}

/// Replace every placeholder occurrence in `template` with `description`.
pub fn render(template: Template, description: &str, policy: EscapePolicy) -> String {
    let value = policy.apply(description);
    if policy == EscapePolicy::Verbatim {
        return template.body().replace(PLACEHOLDER, &value);
    }

    let formatted = double_braces(&value);
    template
        .body()
        .split_inclusive('\n')
        .map(|line| {
            let value = if in_format_string(line) { &formatted } else { &value };
            line.replace(PLACEHOLDER, value)
        })
        .collect()
}

/// Select a template for `description` and render it.
pub fn generate(description: &str, policy: EscapePolicy) -> GeneratedScript {
    let template = select(description);
    GeneratedScript {
        template,
        description: description.to_string(),
        text: render(template, description, policy),
    }
}
