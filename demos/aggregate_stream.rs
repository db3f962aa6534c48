//! Example: aggregating a streaming chat completion
//!
//! This example simulates the chunk stream a transport layer would decode
//! from server-sent events, renders each content delta as it arrives, and
//! prints the reconstructed response at the end.
//!
//! Run the example:
//! ```bash
//! cargo run --example aggregate_stream
//! ```

use chat_stream_aggregator::prelude::*;
use futures::StreamExt;
use serde_json::json;

fn simulated_chunks() -> Vec<Result<ChatCompletionChunk, MergeError>> {
    let pieces = ["Streaming ", "responses ", "arrive ", "in ", "fragments."];

    let mut chunks: Vec<serde_json::Value> = pieces
        .iter()
        .map(|piece| {
            json!({
                "id": "chatcmpl-demo", "object": "chat.completion.chunk",
                "created": 1677652288, "model": "gpt-4-0613",
                "choices": [{"index": 0, "delta": {"role": "assistant", "content": piece}}]
            })
        })
        .collect();
    chunks.push(json!({
        "id": "chatcmpl-demo", "object": "chat.completion.chunk",
        "created": 1677652288, "model": "gpt-4-0613",
        "choices": [{"index": 0, "delta": {}, "finish_reason": "stop"}]
    }));

    chunks
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(MergeError::from))
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = AggregatingStream::new(futures::stream::iter(simulated_chunks()));

    print!("Streaming: ");
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        if let Some(choice) = chunk.choices.first() {
            if let Some(content) = choice.delta.as_ref().and_then(|d| d.content.as_deref()) {
                print!("{}", content);
                use std::io::Write;
                std::io::stdout().flush()?;
            }
        }
    }
    println!();

    let aggregator = stream.into_aggregator();
    println!("Complete: {}", aggregator.all_complete());

    let response = aggregator.response();
    println!(
        "Final content: {}",
        response.choices[0].message.content.as_deref().unwrap_or("")
    );
    println!(
        "Finish reason: {}",
        response.choices[0].finish_reason.as_deref().unwrap_or("(truncated)")
    );

    Ok(())
}
