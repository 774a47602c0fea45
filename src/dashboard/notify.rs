//! Transient, self-dismissing notifications.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Success,
    Info,
    Warning,
    Danger,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Level::Warning | Level::Danger)
    }
}

pub const DEFAULT_TTL_SECS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: Level,
    pub issued_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            issued_at: Utc::now(),
            ttl: Duration::seconds(DEFAULT_TTL_SECS),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Level::Danger, message)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// A TTL too large to add to `issued_at` never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.issued_at.checked_add_signed(self.ttl) {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_ttl() {
        let note = Notification::danger("Error loading results");
        assert!(!note.is_expired(note.issued_at));
        assert!(!note.is_expired(note.issued_at + Duration::seconds(4)));
        assert!(note.is_expired(note.issued_at + Duration::seconds(5)));
    }

    #[test]
    fn test_custom_ttl() {
        let note = Notification::success("ok").with_ttl(Duration::seconds(1));
        assert_eq!(note.ttl_secs(), 1);
        assert!(note.is_expired(note.issued_at + Duration::seconds(1)));
    }

    #[test]
    fn test_unbounded_ttl_never_expires() {
        let note = Notification::info("Counts may be stale").with_ttl(Duration::MAX);
        assert!(!note.is_expired(note.issued_at));
        assert!(!note.is_expired(note.issued_at + Duration::days(365)));
    }

    #[test]
    fn test_failure_levels() {
        assert!(Level::Danger.is_failure());
        assert!(Level::Warning.is_failure());
        assert!(!Level::Success.is_failure());
    }
}
