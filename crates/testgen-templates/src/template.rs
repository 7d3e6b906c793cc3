//! The fixed library of test script blueprints.

/// Token replaced by the user's description when a template is rendered.
pub const PLACEHOLDER: &str = "{description}";

macro_rules! script {
    ($file:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/", $file))
    };
}

const INVALID_LOGIN: &str = script!("invalid_login.py");
const EMPTY_FORM_VALIDATION: &str = script!("empty_form_validation.py");
const EMPTY_SEARCH: &str = script!("empty_search.py");
const SHOPPING_CART: &str = script!("shopping_cart.py");
const LOGOUT: &str = script!("logout.py");
const CUSTOM_SCENARIO: &str = script!("custom_scenario.py");

/// One of the six pytest + Selenium blueprints.
///
/// Every body is a complete test module: imports, a test class with
/// `setup_method`/`teardown_method`, a single test and a `__main__` runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Template {
    InvalidLogin,
    EmptyFormValidation,
    EmptySearch,
    ShoppingCart,
    Logout,
    /// Fallback for descriptions no keyword rule matches.
    Custom,
}

impl Template {
    /// All templates, in rule evaluation order.
    pub fn all() -> [Template; 6] {
        [
            Template::InvalidLogin,
            Template::EmptyFormValidation,
            Template::EmptySearch,
            Template::ShoppingCart,
            Template::Logout,
            Template::Custom,
        ]
    }

    /// Human-readable name, matching the title line inside the script.
    pub fn name(&self) -> &'static str {
        match self {
            Template::InvalidLogin => "Invalid Login Validation",
            Template::EmptyFormValidation => "Empty Form Validation",
            Template::EmptySearch => "Empty Search Validation",
            Template::ShoppingCart => "Shopping Cart Functionality",
            Template::Logout => "Logout Functionality",
            Template::Custom => "Custom Test Scenario",
        }
    }

    /// Name of the test class declared by the script.
    pub fn class_name(&self) -> &'static str {
        match self {
            Template::InvalidLogin => "TestInvalidLogin",
            Template::EmptyFormValidation => "TestEmptyFormValidation",
            Template::EmptySearch => "TestSearchValidation",
            Template::ShoppingCart => "TestShoppingCart",
            Template::Logout => "TestLogout",
            Template::Custom => "TestCustomScenario",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Template::InvalidLogin => INVALID_LOGIN,
            Template::EmptyFormValidation => EMPTY_FORM_VALIDATION,
            Template::EmptySearch => EMPTY_SEARCH,
            Template::ShoppingCart => SHOPPING_CART,
            Template::Logout => LOGOUT,
            Template::Custom => CUSTOM_SCENARIO,
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
