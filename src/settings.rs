//! TOML configuration file support.
//!
//! ```toml
//! no_follow = true
//! max_mentions = 10
//! emoji = "github"          # or "none", or a list of names
//!
//! [users]
//! nitely = "/user/1/nitely/"
//! ```

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fs,
    path::Path,
};

use anyhow::Context;
use serde::Deserialize;

use crate::config::{Config, Identity};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmojiSource {
    #[default]
    Github,
    None,
}

/// Which emoji table a render uses.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EmojiSetting {
    Source(EmojiSource),
    Names(Vec<String>),
}

impl Default for EmojiSetting {
    fn default() -> Self { Self::Source(EmojiSource::Github) }
}

/// Settings read from a file. Absent keys keep the [`Config`] defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub no_follow: Option<bool>,
    pub max_mentions: Option<usize>,
    pub emoji: EmojiSetting,
    /// Username to profile URL.
    pub users: BTreeMap<String, String>,
}

impl Settings {
    /// Read and parse a settings file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid settings TOML.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or unknown keys.
    pub fn parse(text: &str) -> anyhow::Result<Self> { Ok(toml::from_str(text)?) }

    #[must_use]
    pub fn into_config(self) -> Config {
        let mut config = Config::default()
            .with_no_follow(self.no_follow.unwrap_or(true))
            .with_max_mentions(self.max_mentions);
        config = match self.emoji {
            EmojiSetting::Source(EmojiSource::Github) => config,
            EmojiSetting::Source(EmojiSource::None) => config.without_emoji(),
            EmojiSetting::Names(names) => config.with_emoji(names.into_iter().collect::<HashSet<_>>()),
        };
        if !self.users.is_empty() {
            let users: HashMap<String, Identity> = self
                .users
                .into_iter()
                .map(|(name, url)| (name.to_lowercase(), Identity::new(name, url)))
                .collect();
            config = config.with_resolver(users);
        }
        config
    }
}
