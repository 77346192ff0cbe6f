use taskboard_core::TaskboardError;
use thiserror::Error;

/// Failures surfaced by the remote sync adapter.
///
/// Every kind rolls back an optimistic move; the messages stay
/// distinguishable so the operator can tell a dead network from a server
/// rejection or a mangled response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Server(u16),

    #[error("could not decode server response: {0}")]
    Decode(String),
}

impl From<SyncError> for TaskboardError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Network(msg) => TaskboardError::Connection(msg),
            SyncError::Server(status) => {
                TaskboardError::Connection(format!("server returned status {status}"))
            }
            SyncError::Decode(msg) => TaskboardError::Serialization(msg),
        }
    }
}
