//! Canned scenario descriptions offered by the menu.

pub const SCENARIOS: [&str; 5] = [
    "Test that logging in with invalid username and password shows an error message",
    "Test that submitting an empty registration form displays validation errors for all required fields",
    "Test that clicking the search button without entering any search term shows a warning message",
    "Test that adding an item to the shopping cart updates the cart count correctly",
    "Test that clicking logout button clears the user session and redirects to homepage",
];

/// Look up a scenario by its 1-based menu number.
pub fn scenario(number: usize) -> Option<&'static str> {
    number.checked_sub(1).and_then(|idx| SCENARIOS.get(idx).copied())
}
