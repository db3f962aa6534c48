use crate::errors::{MergeError, MergeResult};
use crate::merge::aggregator::ResponseAggregator;
use crate::types::{ChatCompletionChunk, ChatCompletionResponse};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Pass-through adapter that folds every chunk into an owned
    /// [`ResponseAggregator`] while re-yielding it, so a consumer can render
    /// incrementally and still end up with the reconstructed response.
    ///
    /// A malformed fragment is surfaced as that item's error; the aggregator
    /// itself stays consistent and keeps accepting later chunks.
    pub struct AggregatingStream<S> {
        #[pin]
        inner: S,
        aggregator: ResponseAggregator,
    }
}

impl<S> AggregatingStream<S>
where
    S: Stream<Item = Result<ChatCompletionChunk, MergeError>>,
{
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            aggregator: ResponseAggregator::new(),
        }
    }

    pub fn with_aggregator(inner: S, aggregator: ResponseAggregator) -> Self {
        Self { inner, aggregator }
    }

    /// The accumulated-so-far state. Valid at any point, including after the
    /// upstream was cancelled; a partial result is a supported outcome.
    pub fn aggregator(&self) -> &ResponseAggregator {
        &self.aggregator
    }

    pub fn into_aggregator(self) -> ResponseAggregator {
        self.aggregator
    }
}

impl<S> Stream for AggregatingStream<S>
where
    S: Stream<Item = Result<ChatCompletionChunk, MergeError>>,
{
    type Item = Result<ChatCompletionChunk, MergeError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        match this.inner.poll_next(cx) {
            Poll::Ready(Some(Ok(chunk))) => match this.aggregator.feed_chunk(&chunk) {
                Ok(()) => Poll::Ready(Some(Ok(chunk))),
                Err(e) => Poll::Ready(Some(Err(e))),
            },
            other => other,
        }
    }
}

/// Drains a chunk stream into the reconstructed response.
///
/// Recoverable per-fragment errors are skipped so one malformed fragment
/// cannot fail an otherwise healthy stream; transport errors propagate.
pub async fn collect_response<S>(stream: S) -> MergeResult<ChatCompletionResponse>
where
    S: Stream<Item = Result<ChatCompletionChunk, MergeError>>,
{
    use futures::StreamExt;

    let mut stream = std::pin::pin!(stream);
    let mut aggregator = ResponseAggregator::new();

    while let Some(result) = stream.next().await {
        match result {
            Ok(chunk) => match aggregator.feed_chunk(&chunk) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {}
                Err(e) => return Err(e),
            },
            Err(e) if e.is_recoverable() => {}
            Err(e) => return Err(e),
        }
    }

    Ok(aggregator.response())
}
