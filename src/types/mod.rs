mod chunk;
mod message;

pub use chunk::{
    ChatCompletionChunk, ChatDelta, ChoicePayload, ChunkChoice, FunctionCallDelta, ToolCallDelta,
};
pub use message::{
    ChatCompletionChoice, ChatCompletionResponse, ChatMessage, ChatMessageRole, FinishReason,
    FunctionCall, ToolCall, Usage,
};
