//! Message recipients.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::ConfigurationError;

lazy_static! {
    static ref CHANNEL_PATTERN: Regex =
        Regex::new(r"^[#&][^\s,\x07]+$").expect("channel pattern is valid");
    static ref NICKNAME_PATTERN: Regex =
        Regex::new(r"^[A-Za-z\[\]\\`_^{|}][A-Za-z0-9\[\]\\`_^{|}\-]*$")
            .expect("nickname pattern is valid");
}

/// A channel or a single user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "type", content = "name", rename_all = "lowercase")]
pub enum Target {
    Channel(String),
    User(String),
}

impl Target {
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        let name = name.trim();
        if CHANNEL_PATTERN.is_match(name) {
            Ok(Target::Channel(name.to_string()))
        } else if NICKNAME_PATTERN.is_match(name) {
            Ok(Target::User(name.to_string()))
        } else {
            Err(ConfigurationError::InvalidTarget(name.to_string()))
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Target::Channel(name) | Target::User(name) => name,
        }
    }

    /// Names are case-insensitive on the wire; this is the grouping identity.
    pub fn identity(&self) -> String {
        self.name().to_lowercase()
    }

    pub fn is_channel(&self) -> bool {
        matches!(self, Target::Channel(_))
    }
}

impl FromStr for Target {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::parse(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
