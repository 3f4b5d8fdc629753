use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Serialize;

pub const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Single-slot transient notice feed for the dashboard.
///
/// At most one notice is ever held: posting while one is visible replaces
/// it, and each notice expires on its own after a fixed timeout. There is no
/// backlog and no manual dismissal.
pub struct NoticeBoard {
    slot: Mutex<Option<(Notice, Instant)>>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        NoticeBoard {
            slot: Mutex::new(None),
            ttl,
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.post(NoticeLevel::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.post(NoticeLevel::Error, message.into());
    }

    fn post(&self, level: NoticeLevel, message: String) {
        let mut slot = self.slot.lock().expect("notice board lock poisoned");
        *slot = Some((Notice { level, message }, Instant::now()));
    }

    /// The visible notice, if one is posted and not yet expired.
    pub fn current(&self) -> Option<Notice> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<Notice> {
        let mut slot = self.slot.lock().expect("notice board lock poisoned");
        match &*slot {
            Some((_, posted_at)) if now.duration_since(*posted_at) >= self.ttl => {
                *slot = None;
                None
            }
            Some((notice, _)) => Some(notice.clone()),
            None => None,
        }
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}
