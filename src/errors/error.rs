use thiserror::Error;

pub type MergeResult<T> = Result<T, MergeError>;

#[derive(Error, Debug, Clone)]
pub enum MergeError {
    /// A structurally invalid fragment, e.g. a tool-call fragment without a
    /// slot index. Fails that single fragment; accumulated state and the
    /// rest of the stream are unaffected.
    #[error("Malformed fragment: {0}")]
    MalformedFragment(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An upstream transport failure surfaced through a chunk stream.
    #[error("Stream error: {0}")]
    Stream(String),
}

impl MergeError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        MergeError::MalformedFragment(detail.into())
    }

    /// Whether processing the rest of the stream remains safe after this
    /// error. Malformed fragments are skipped; transport errors are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MergeError::MalformedFragment(_) | MergeError::Deserialization(_)
        )
    }
}

impl From<serde_json::Error> for MergeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            MergeError::Deserialization(err.to_string())
        } else {
            MergeError::Serialization(err.to_string())
        }
    }
}
