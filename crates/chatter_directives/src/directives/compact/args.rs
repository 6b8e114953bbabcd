use chatter_core::ConfigurationError;
use serde::{Deserialize, Serialize};

use super::NAME;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompactListArgs {
    #[serde(default)]
    pub intro: String,

    #[serde(default)]
    pub separator: Option<String>,
}

/// Resolved settings for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactListSpec {
    pub intro: String,
    pub separator: String,
    /// Maximum characters per chunk
    pub budget: usize,
}

impl CompactListSpec {
    pub fn resolve(
        args: CompactListArgs,
        default_separator: &str,
        budget: usize,
    ) -> Result<Self, ConfigurationError> {
        let intro_len = args.intro.chars().count();
        if intro_len >= budget {
            return Err(ConfigurationError::InvalidParam {
                directive: NAME,
                param: "intro".to_string(),
                message: format!("{intro_len} characters leaves no room within {budget}"),
            });
        }
        Ok(Self {
            intro: args.intro,
            separator: args
                .separator
                .unwrap_or_else(|| default_separator.to_string()),
            budget,
        })
    }
}
