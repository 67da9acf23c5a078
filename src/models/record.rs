use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const RECORD_TYPE_USER: &str = "user";
pub const RECORD_TYPE_ASSISTANT: &str = "assistant";

/// One block of a structured message body
#[derive(Debug, Clone, Default, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

/// Message body as written on disk: either plain text or a list of blocks
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawMessage {
    #[serde(default)]
    role: String,
    #[serde(default)]
    content: Option<RawContent>,
}

/// Message payload of a transcript record, with block content flattened to text
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMessage")]
pub struct Message {
    pub role: String,
    pub content: String,
    /// Set when the body carried at least one `tool_use` block
    pub has_tool_use: bool,
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        let (content, has_tool_use) = match raw.content {
            None => (String::new(), false),
            Some(RawContent::Text(text)) => (text, false),
            Some(RawContent::Blocks(blocks)) => {
                let has_tool_use = blocks.iter().any(|b| b.block_type == "tool_use");
                let text = blocks
                    .iter()
                    .filter(|b| b.block_type == "text")
                    .filter_map(|b| b.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("\n");
                (text, has_tool_use)
            }
        };
        Self { role: raw.role, content, has_tool_use }
    }
}

/// One line of a session transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRecord {
    #[serde(default)]
    pub parent_uuid: Option<String>,
    #[serde(default)]
    pub is_sidechain: bool,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub cwd: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub git_branch: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub message: Message,
    #[serde(default)]
    pub uuid: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TranscriptRecord {
    pub fn is_user(&self) -> bool {
        self.record_type == RECORD_TYPE_USER
    }

    pub fn is_assistant(&self) -> bool {
        self.record_type == RECORD_TYPE_ASSISTANT
    }
}
