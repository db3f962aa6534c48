use crate::errors::MergeResult;
use crate::merge::choice::ChoiceState;
use crate::types::{ChatCompletionChunk, ChatCompletionResponse, ChunkChoice, Usage};

/// Tuning knobs for [`ResponseAggregator`].
#[derive(Debug, Clone)]
pub struct AggregatorOptions {
    /// Target index for fragments that carry no index of their own.
    /// Protocols without a choice index address the single implicit choice.
    pub implicit_index: u32,

    /// When set, fragments addressed to an already-finished choice are
    /// silently dropped instead of merged. Off by default: providers may
    /// append trailing metadata (logprobs, usage) after the finish reason.
    pub ignore_after_finish: bool,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            implicit_index: 0,
            ignore_after_finish: false,
        }
    }
}

/// Folds an ordered stream of chunk fragments into per-choice state and a
/// finalized response equivalent to the non-streaming shape.
///
/// Choices are created lazily on first sight of their index and kept in
/// first-seen order for the lifetime of the aggregation. The aggregator is
/// single-writer: one stream-reading task drives [`feed_chunk`] /
/// [`feed`], and concurrent snapshot readers must share that exclusion.
///
/// [`feed_chunk`]: ResponseAggregator::feed_chunk
/// [`feed`]: ResponseAggregator::feed
#[derive(Debug, Default)]
pub struct ResponseAggregator {
    options: AggregatorOptions,
    choices: Vec<ChoiceState>,
    id: String,
    object: String,
    created: i64,
    model: String,
    system_fingerprint: Option<String>,
    usage: Option<Usage>,
}

impl ResponseAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AggregatorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Feeds one whole chunk: captures the response envelope (id, model,
    /// usage, ...) and merges every choice fragment it carries.
    ///
    /// A malformed fragment fails without corrupting accumulated state or
    /// aborting the session; later chunks keep merging.
    pub fn feed_chunk(&mut self, chunk: &ChatCompletionChunk) -> MergeResult<()> {
        if !chunk.id.is_empty() {
            self.id = chunk.id.clone();
        }
        if !chunk.object.is_empty() {
            self.object = chunk.object.clone();
        }
        if chunk.created != 0 {
            self.created = chunk.created;
        }
        if !chunk.model.is_empty() {
            self.model = chunk.model.clone();
        }
        if let Some(fingerprint) = &chunk.system_fingerprint {
            self.system_fingerprint = Some(fingerprint.clone());
        }
        if let Some(usage) = chunk.usage {
            self.usage = Some(usage);
        }

        for fragment in &chunk.choices {
            self.feed(fragment)?;
        }

        Ok(())
    }

    /// Merges one choice fragment, routed by its explicit index or the
    /// configured implicit index. The target choice state is created on
    /// first sight and lives until the aggregator is dropped.
    pub fn feed(&mut self, fragment: &ChunkChoice) -> MergeResult<()> {
        let index = fragment.index.unwrap_or(self.options.implicit_index);
        let ignore_after_finish = self.options.ignore_after_finish;

        let position = match self.choices.iter().position(|state| state.index == index) {
            Some(position) => position,
            None => {
                self.choices.push(ChoiceState::new(index));
                self.choices.len() - 1
            }
        };
        let state = &mut self.choices[position];

        if ignore_after_finish && state.is_complete() {
            return Ok(());
        }

        state.merge(fragment)?;
        Ok(())
    }

    /// All known choices in first-seen order. Usable at any point; before
    /// finalization it carries the accumulated-so-far partial results.
    pub fn snapshot(&self) -> &[ChoiceState] {
        &self.choices
    }

    /// Whether the choice at `index` has recorded a finish reason. Unknown
    /// indices report false.
    pub fn is_complete(&self, index: u32) -> bool {
        self.choices
            .iter()
            .any(|state| state.index == index && state.is_complete())
    }

    /// True once every known choice is finished; the caller's cue to stop
    /// reading the stream. False while no choice has been seen yet.
    pub fn all_complete(&self) -> bool {
        !self.choices.is_empty() && self.choices.iter().all(ChoiceState::is_complete)
    }

    /// Builds the reconstructed non-streaming response. Choices that never
    /// received a finish reason finalize with `finish_reason: None`, which is
    /// the caller's signal of a truncated, partial result.
    pub fn response(&self) -> ChatCompletionResponse {
        ChatCompletionResponse {
            id: self.id.clone(),
            object: self.object.clone(),
            created: self.created,
            model: self.model.clone(),
            choices: self.choices.iter().map(ChoiceState::finalize).collect(),
            usage: self.usage,
            system_fingerprint: self.system_fingerprint.clone(),
        }
    }
}
