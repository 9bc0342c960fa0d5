//! Utility helpers shared across integration tests.

use std::collections::HashMap;

use inlinemark::{Config, Identity, Rendered};

/// Build the expected HTML for a block render from its lines.
///
/// Keeps long expected outputs readable: one line of HTML per argument.
macro_rules! html_lines {
    ($($line:expr),* $(,)?) => {
        [$($line),*].join("\n")
    };
}

/// The users the mention tests know about.
pub fn known_users() -> HashMap<String, Identity> {
    ["nitely", "esteban", "áéíóú"]
        .into_iter()
        .enumerate()
        .map(|(id, name)| {
            (
                name.to_string(),
                Identity::new(name, format!("/user/{}/{name}/", id + 1)),
            )
        })
        .collect()
}

/// Profile URL of a user from [`known_users`].
pub fn profile(name: &str) -> String {
    known_users()
        .remove(name)
        .map(|identity| identity.profile_url)
        .unwrap_or_else(|| panic!("{name} is not a known user"))
}

/// Render `text` with `config`, failing the test on error.
pub fn render_with(text: &str, config: &Config) -> Rendered {
    inlinemark::render(text, config).expect("render should not fail")
}

/// Render `text` with the default configuration and return the HTML.
pub fn render_html(text: &str) -> String { render_with(text, &Config::default()).html }
