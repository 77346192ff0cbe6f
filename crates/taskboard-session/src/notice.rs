use std::time::{Duration, Instant};

/// Transient, dismissible error message surfaced after a failed sync.
///
/// Cleared by explicit dismissal or TTL expiry, whichever comes first. The
/// presentation layer renders it as a banner/toast; a successful sync never
/// raises one.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    created_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}
