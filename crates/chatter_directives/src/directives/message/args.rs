use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MessageArgs {
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub priority: Option<i64>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default, alias = "replyWithRecipient")]
    pub reply: bool,
}

impl MessageArgs {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }
}
