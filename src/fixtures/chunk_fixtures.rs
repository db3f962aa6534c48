//! Streaming chunk fixtures

use serde_json::json;

fn chunk(choices: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion.chunk",
        "created": 1677652288,
        "model": "gpt-4-0613",
        "choices": choices
    })
}

/// Single chunk carrying a content delta
pub fn content_delta_chunk(content: &str) -> serde_json::Value {
    chunk(json!([{
        "index": 0,
        "delta": {"content": content},
        "finish_reason": null
    }]))
}

/// Terminal chunk with a finish reason and empty delta
pub fn final_chunk(finish_reason: &str) -> serde_json::Value {
    chunk(json!([{
        "index": 0,
        "delta": {},
        "finish_reason": finish_reason
    }]))
}

/// Trailing usage chunk, sent when stream usage was requested
pub fn usage_chunk() -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion.chunk",
        "created": 1677652288,
        "model": "gpt-4-0613",
        "choices": [],
        "usage": {
            "prompt_tokens": 9,
            "completion_tokens": 12,
            "total_tokens": 21
        }
    })
}

/// Chunk sequence for a plain text response: role, two content pieces, stop
pub fn text_stream_sequence() -> Vec<serde_json::Value> {
    vec![
        chunk(json!([{
            "index": 0,
            "delta": {"role": "assistant", "content": ""},
            "finish_reason": null
        }])),
        content_delta_chunk("Hello"),
        content_delta_chunk(" there!"),
        final_chunk("stop"),
    ]
}

/// Chunk sequence for a tool call split across fragments
pub fn tool_call_stream_sequence() -> Vec<serde_json::Value> {
    vec![
        chunk(json!([{
            "index": 0,
            "delta": {
                "role": "assistant",
                "tool_calls": [{
                    "index": 0,
                    "id": "call_abc123",
                    "type": "function",
                    "function": {"name": "get_weather", "arguments": ""}
                }]
            },
            "finish_reason": null
        }])),
        chunk(json!([{
            "index": 0,
            "delta": {
                "tool_calls": [{
                    "index": 0,
                    "function": {"arguments": "{\"location\":"}
                }]
            },
            "finish_reason": null
        }])),
        chunk(json!([{
            "index": 0,
            "delta": {
                "tool_calls": [{
                    "index": 0,
                    "function": {"arguments": "\"Paris\"}"}
                }]
            },
            "finish_reason": null
        }])),
        final_chunk("tool_calls"),
    ]
}

/// Chunk sequence interleaving two choices, index 1 observed first
pub fn multi_choice_stream_sequence() -> Vec<serde_json::Value> {
    vec![
        chunk(json!([{
            "index": 1,
            "delta": {"role": "assistant", "content": "Second"},
            "finish_reason": null
        }])),
        chunk(json!([{
            "index": 0,
            "delta": {"role": "assistant", "content": "First"},
            "finish_reason": null
        }])),
        chunk(json!([{
            "index": 1,
            "delta": {"content": " choice"},
            "finish_reason": null
        }])),
        chunk(json!([{
            "index": 0,
            "delta": {"content": " choice"},
            "finish_reason": null
        }])),
        chunk(json!([
            {"index": 0, "delta": {}, "finish_reason": "stop"},
            {"index": 1, "delta": {}, "finish_reason": "stop"}
        ])),
    ]
}

/// The non-streaming response equivalent of [`text_stream_sequence`]
pub fn text_response_equivalent() -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion.chunk",
        "created": 1677652288,
        "model": "gpt-4-0613",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "Hello there!"
            },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": null
    })
}
