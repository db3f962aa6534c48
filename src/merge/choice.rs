use crate::errors::MergeResult;
use crate::merge::content::append_content;
use crate::merge::tool_calls::{merge_tool_calls, ToolCallDraft};
use crate::types::{
    ChatCompletionChoice, ChatMessage, ChatMessageRole, ChoicePayload, ChunkChoice,
};

/// Running state of one choice, folded fragment by fragment.
///
/// Each field follows its own merge rule: `index` is last-write-wins, `role`
/// is set at most once, `content` and tool-call arguments only grow,
/// `finish_reason` is monotonic (a later empty value never clears it), and
/// `finish_details`/`logprobs` are replaced by any later non-null value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceState {
    pub index: u32,
    pub role: Option<ChatMessageRole>,
    pub content: Option<String>,
    pub tool_calls: Vec<ToolCallDraft>,
    pub tool_call_id: Option<String>,
    pub finish_reason: Option<String>,
    pub finish_details: Option<serde_json::Value>,
    pub logprobs: Option<serde_json::Value>,
}

impl ChoiceState {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Folds one fragment into this state. Field order matters: the payload
    /// (full message or delta) is applied before the trailing scalars, and a
    /// full message replaces role/content/tool-calls wholesale, skipping any
    /// delta carried by the same fragment.
    ///
    /// A fragment with every optional field absent is a legal no-op.
    pub fn merge(&mut self, fragment: &ChunkChoice) -> MergeResult<&mut Self> {
        if let Some(index) = fragment.index {
            self.index = index;
        }

        match fragment.payload() {
            Some(ChoicePayload::Full(message)) => self.replace_with(message),
            Some(ChoicePayload::Delta(delta)) => {
                // Tool calls first: they are the only fallible merge, and a
                // rejected fragment must leave the whole state untouched.
                if let Some(tool_calls) = &delta.tool_calls {
                    merge_tool_calls(&mut self.tool_calls, tool_calls)?;
                }
                if self.role.is_none() {
                    self.role = delta.role;
                }
                self.content = append_content(self.content.take(), delta.content.as_deref());
            }
            None => {}
        }

        if let Some(details) = &fragment.finish_details {
            self.finish_details = Some(details.clone());
        }

        if let Some(logprobs) = &fragment.logprobs {
            self.logprobs = Some(logprobs.clone());
        }

        if let Some(reason) = &fragment.finish_reason {
            if !reason.is_empty() {
                self.finish_reason = Some(reason.clone());
            }
        }

        Ok(self)
    }

    fn replace_with(&mut self, message: &ChatMessage) {
        self.role = Some(message.role);
        self.content = message.content.clone();
        self.tool_call_id = message.tool_call_id.clone();
        self.tool_calls = message
            .tool_calls
            .iter()
            .flatten()
            .enumerate()
            .map(|(slot, call)| ToolCallDraft {
                index: slot as u32,
                id: Some(call.id.clone()),
                tool_type: Some(call.tool_type.clone()),
                name: Some(call.function.name.clone()),
                arguments: call.function.arguments.clone(),
            })
            .collect();
    }

    /// A choice is complete once a non-empty finish reason has been recorded.
    /// Later fragments are still merged; completeness only marks the choice
    /// as reportable.
    pub fn is_complete(&self) -> bool {
        self.finish_reason.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// Finalizes into the non-streaming choice shape. Also valid for a
    /// truncated stream: an absent finish reason is the caller's signal that
    /// the choice is a partial result.
    pub fn finalize(&self) -> ChatCompletionChoice {
        let tool_calls: Vec<_> = self.tool_calls.iter().map(ToolCallDraft::finalize).collect();

        ChatCompletionChoice {
            index: self.index,
            message: ChatMessage {
                role: self.role.unwrap_or(ChatMessageRole::Assistant),
                content: self.content.clone(),
                name: None,
                tool_calls: (!tool_calls.is_empty()).then_some(tool_calls),
                tool_call_id: self.tool_call_id.clone(),
            },
            finish_reason: self.finish_reason.clone(),
            logprobs: self.logprobs.clone(),
        }
    }
}
