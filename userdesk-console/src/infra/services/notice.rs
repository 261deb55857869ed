//! Operator-visible notices.
//!
//! Domains report outcomes through the [`NoticeSink`] port they are handed
//! at construction. The console's sink is a [`NoticeBoard`], a bounded queue
//! the view renders as toasts.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{error, info};
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Fire-and-forget sink for operator notices
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedNotice {
    pub id: NoticeId,
    pub notice: Notice,
}

/// Bounded queue of notices waiting to be shown or dismissed.
#[derive(Debug)]
pub struct NoticeBoard {
    capacity: usize,
    next_id: AtomicU64,
    entries: Mutex<VecDeque<PostedNotice>>,
}

impl NoticeBoard {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            next_id: AtomicU64::new(1),
            entries: Mutex::new(VecDeque::new()),
        }
    }

    /// Currently visible notices, oldest first.
    pub fn posted(&self) -> Vec<PostedNotice> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn dismiss(&self, id: NoticeId) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        entries.len() != before
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl NoticeSink for NoticeBoard {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => error!("[Notice] {}", notice.message),
            NoticeLevel::Info | NoticeLevel::Success => {
                info!("[Notice] {}", notice.message)
            }
        }

        let id = NoticeId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut entries = self.entries.lock();
        entries.push_back(PostedNotice { id, notice });
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_notices_fall_off_past_capacity() {
        let board = NoticeBoard::new(2);
        board.notify(Notice::info("one"));
        board.notify(Notice::success("two"));
        board.notify(Notice::error("three"));

        let messages: Vec<String> = board
            .posted()
            .into_iter()
            .map(|posted| posted.notice.message)
            .collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn dismiss_removes_only_the_named_notice() {
        let board = NoticeBoard::new(4);
        board.notify(Notice::success("saved"));
        board.notify(Notice::error("failed"));
        let first = board.posted()[0].id;

        assert!(board.dismiss(first));
        assert!(!board.dismiss(first));
        assert_eq!(board.len(), 1);
        assert_eq!(board.posted()[0].notice.level, NoticeLevel::Error);
    }
}
