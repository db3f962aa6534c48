//! The merge engine: folds an ordered stream of chunk fragments into
//! per-choice accumulated state and a finalized response.

mod aggregator;
mod choice;
mod content;
mod stream;
mod tool_calls;


pub use aggregator::{AggregatorOptions, ResponseAggregator};
pub use choice::ChoiceState;
pub use content::append_content;
pub use stream::{collect_response, AggregatingStream};
pub use tool_calls::{merge_tool_calls, ToolCallDraft};
