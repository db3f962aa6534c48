//! Deterministic aggregation of streaming chat completion chunks.
//!
//! A streaming chat request delivers each choice's content, role, tool-call
//! arguments and finish state incrementally, across many small fragments.
//! This crate folds that fragment stream back into the response a
//! non-streaming call would have returned: content and tool-call arguments
//! grow by concatenation, roles and call identifiers are set once, and the
//! finish reason is monotonic.
//!
//! The crate performs no I/O. The transport layer reads and decodes the
//! event stream; this library consumes already-decoded
//! [`ChatCompletionChunk`] values and produces a
//! [`ChatCompletionResponse`](types::ChatCompletionResponse).
//!
//! ```
//! use chat_stream_aggregator::{ResponseAggregator, types::ChatCompletionChunk};
//!
//! let chunk: ChatCompletionChunk = serde_json::from_str(r#"{
//!     "id": "chatcmpl-1", "object": "chat.completion.chunk",
//!     "created": 0, "model": "gpt-4",
//!     "choices": [{"index": 0, "delta": {"role": "assistant", "content": "Hi"}}]
//! }"#).unwrap();
//!
//! let mut aggregator = ResponseAggregator::new();
//! aggregator.feed_chunk(&chunk).unwrap();
//! assert_eq!(aggregator.snapshot()[0].content.as_deref(), Some("Hi"));
//! ```
//!
//! [`ChatCompletionChunk`]: types::ChatCompletionChunk

pub mod errors;
pub mod merge;
pub mod types;

#[cfg(test)]
pub mod fixtures;

pub use errors::{MergeError, MergeResult};
pub use merge::{
    collect_response, AggregatingStream, AggregatorOptions, ChoiceState, ResponseAggregator,
};

pub mod prelude {
    pub use crate::errors::{MergeError, MergeResult};
    pub use crate::merge::{
        collect_response, AggregatingStream, AggregatorOptions, ResponseAggregator,
    };
    pub use crate::types::{ChatCompletionChunk, ChatCompletionResponse};
}
