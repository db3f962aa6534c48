use crate::types::{ChatMessage, ChatMessageRole, Usage};
use serde::Deserialize;

/// One server-sent event of a streaming chat completion, already decoded
/// from JSON by the transport layer.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChunk {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChunkChoice>,

    #[serde(default)]
    pub system_fingerprint: Option<String>,

    /// Sent on a trailing chunk when the request asked for stream usage.
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One partial update for one choice. Every field is independently optional;
/// a fragment carrying none of them is a legal no-op.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub index: Option<u32>,

    /// Full replacement payload, sent by terminal or non-streaming fragments.
    #[serde(default)]
    pub message: Option<ChatMessage>,

    #[serde(default)]
    pub delta: Option<ChatDelta>,

    #[serde(default)]
    pub finish_reason: Option<String>,

    /// Deprecated companion of `finish_reason`, still emitted by some models.
    #[serde(default)]
    pub finish_details: Option<serde_json::Value>,

    #[serde(default)]
    pub logprobs: Option<serde_json::Value>,
}

/// Tagged view of a fragment's payload. The wire format allows `message` and
/// `delta` to coexist on one fragment; a full message always wins and the
/// delta is ignored for that fragment.
#[derive(Debug)]
pub enum ChoicePayload<'a> {
    Full(&'a ChatMessage),
    Delta(&'a ChatDelta),
}

impl ChunkChoice {
    pub fn payload(&self) -> Option<ChoicePayload<'_>> {
        match (&self.message, &self.delta) {
            (Some(message), _) => Some(ChoicePayload::Full(message)),
            (None, Some(delta)) => Some(ChoicePayload::Delta(delta)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatDelta {
    #[serde(default)]
    pub role: Option<ChatMessageRole>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCallDelta>>,
}

/// A partial tool invocation. The slot `index` is the stable merge key for
/// one call across fragments; the hosting protocol always assigns it, so a
/// fragment without one is rejected at merge time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolCallDelta {
    #[serde(default)]
    pub index: Option<u32>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type", default)]
    pub tool_type: Option<String>,

    #[serde(default)]
    pub function: Option<FunctionCallDelta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionCallDelta {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub arguments: Option<String>,
}
