//! Ordered keyword rules mapping a description to a template.

use crate::template::Template;

/// Interchangeable spellings of one keyword; any of them satisfies it.
pub type Keyword = &'static [&'static str];

/// A template guarded by keywords that must all appear in the description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub keywords: &'static [Keyword],
    pub template: Template,
}

impl Rule {
    /// `haystack` must already be lowercase.
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords
            .iter()
            .all(|spellings| spellings.iter().any(|w| haystack.contains(w)))
    }
}

/// First match wins. Descriptions matching none of these use [`Template::Custom`].
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &[&["login", "logging in"], &["invalid"]],
        template: Template::InvalidLogin,
    },
    Rule {
        keywords: &[&["empty"], &["form"]],
        template: Template::EmptyFormValidation,
    },
    Rule {
        keywords: &[&["search"], &["empty"]],
        template: Template::EmptySearch,
    },
    Rule {
        keywords: &[&["cart", "shopping"]],
        template: Template::ShoppingCart,
    },
    Rule {
        keywords: &[&["logout"]],
        template: Template::Logout,
    },
];

/// Pick the template for a description (case-insensitive).
pub fn select(description: &str) -> Template {
    select_with(RULES, description)
}

/// Evaluate an arbitrary rule table in order.
pub fn select_with(rules: &[Rule], description: &str) -> Template {
    let lowered = description.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.template)
        .unwrap_or(Template::Custom)
}
