use std::time::{Duration, Instant};

/// Category of a transient message. At most one notice per kind is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Confirmation of a palette-level action.
    General,
    /// "<FIELD> copied!" toast.
    Copy,
    /// Checkmark on the card whose value was copied.
    CopyFeedback,
}

impl NoticeKind {
    const COUNT: usize = 3;

    fn slot(self) -> usize {
        match self {
            NoticeKind::General => 0,
            NoticeKind::Copy => 1,
            NoticeKind::CopyFeedback => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

/// Expiring messages keyed by kind. A new notice replaces the previous one of
/// the same kind instead of queueing behind it.
#[derive(Debug, Default)]
pub struct Notifications {
    slots: [Option<Notice>; NoticeKind::COUNT],
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, ttl: Duration, now: Instant) {
        self.slots[kind.slot()] = Some(Notice {
            message: message.into(),
            expires_at: now + ttl,
        });
    }

    pub fn get(&self, kind: NoticeKind) -> Option<&str> {
        self.slots[kind.slot()].as_ref().map(|n| n.message.as_str())
    }

    pub fn dismiss(&mut self, kind: NoticeKind) {
        self.slots[kind.slot()] = None;
    }

    /// Drop every notice whose lifetime has elapsed at `now`.
    pub fn expire(&mut self, now: Instant) {
        for slot in self.slots.iter_mut() {
            if slot.as_ref().is_some_and(|n| n.expires_at <= now) {
                *slot = None;
            }
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
