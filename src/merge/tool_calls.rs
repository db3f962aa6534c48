use crate::errors::{MergeError, MergeResult};
use crate::merge::content::append_content;
use crate::types::{FunctionCall, ToolCall, ToolCallDelta};

/// One tool call under accumulation. The slot `index` is the merge key; `id`
/// and `name` arrive once, typically on the slot's first fragment, while
/// `arguments` grows across fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolCallDraft {
    pub index: u32,
    pub id: Option<String>,
    pub tool_type: Option<String>,
    pub name: Option<String>,
    pub arguments: String,
}

impl ToolCallDraft {
    fn from_delta(index: u32, delta: &ToolCallDelta) -> Self {
        let function = delta.function.as_ref();
        Self {
            index,
            id: delta.id.clone().filter(|id| !id.is_empty()),
            tool_type: delta.tool_type.clone().filter(|t| !t.is_empty()),
            name: function
                .and_then(|f| f.name.clone())
                .filter(|name| !name.is_empty()),
            arguments: function
                .and_then(|f| f.arguments.clone())
                .unwrap_or_default(),
        }
    }

    /// Converts the draft to the wire tool-call shape. A truncated stream may
    /// never have delivered the id or name; those finalize as empty strings,
    /// leaving the partial result usable rather than failing it.
    pub fn finalize(&self) -> ToolCall {
        ToolCall {
            id: self.id.clone().unwrap_or_default(),
            tool_type: self
                .tool_type
                .clone()
                .unwrap_or_else(|| "function".to_string()),
            function: FunctionCall {
                name: self.name.clone().unwrap_or_default(),
                arguments: self.arguments.clone(),
            },
        }
    }
}

/// Folds a batch of tool-call fragments into the accumulated drafts.
///
/// Drafts keep first-seen slot order, independent of numeric slot value; the
/// slot index is the merge key, not the array position. Identifier, type and
/// name are set-once-if-absent; arguments append. A fragment without a slot
/// index is rejected without touching already-accumulated state.
pub fn merge_tool_calls(
    existing: &mut Vec<ToolCallDraft>,
    incoming: &[ToolCallDelta],
) -> MergeResult<()> {
    // Validate the whole batch up front so a bad fragment cannot leave the
    // drafts half-updated.
    if incoming.iter().any(|delta| delta.index.is_none()) {
        return Err(MergeError::malformed(
            "tool call fragment without slot index",
        ));
    }

    for delta in incoming {
        let index = delta.index.unwrap_or_default();

        match existing.iter_mut().find(|draft| draft.index == index) {
            None => existing.push(ToolCallDraft::from_delta(index, delta)),
            Some(draft) => {
                if draft.id.is_none() {
                    draft.id = delta.id.clone().filter(|id| !id.is_empty());
                }
                if draft.tool_type.is_none() {
                    draft.tool_type = delta.tool_type.clone().filter(|t| !t.is_empty());
                }
                if let Some(function) = &delta.function {
                    if draft.name.is_none() {
                        draft.name = function.name.clone().filter(|name| !name.is_empty());
                    }
                    let arguments = append_content(
                        Some(std::mem::take(&mut draft.arguments)),
                        function.arguments.as_deref(),
                    );
                    draft.arguments = arguments.unwrap_or_default();
                }
            }
        }
    }

    Ok(())
}
