//! Transient user notices (toasts)

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Default time a toast stays visible
pub const DEFAULT_DISMISS_SECS: i64 = 5;

/// Number of toasts visible at once; a new one replaces the old.
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Added,
    AlreadyPresent,
    ListFull,
    Removed,
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Self::at(kind, Utc::now())
    }

    pub fn at(kind: NoticeKind, created_at: DateTime<Utc>) -> Self {
        let (title, description, variant) = match kind {
            NoticeKind::Added => (
                "Added to comparison",
                "The vehicle has been added to your comparison list.",
                NoticeVariant::Default,
            ),
            NoticeKind::AlreadyPresent => (
                "Already in comparison",
                "This vehicle is already in your comparison list.",
                NoticeVariant::Default,
            ),
            NoticeKind::ListFull => (
                "Comparison list full",
                "You can compare a maximum of 4 vehicles at a time.",
                NoticeVariant::Destructive,
            ),
            NoticeKind::Removed => (
                "Removed from comparison",
                "The vehicle has been removed from your list.",
                NoticeVariant::Default,
            ),
            NoticeKind::Cleared => (
                "Comparison cleared",
                "Your comparison list has been cleared.",
                NoticeVariant::Default,
            ),
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            title,
            description,
            variant,
            created_at,
        }
    }
}

/// Sink for user notices
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Keeps every notice; handy for tests and batch output
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Visible toasts, newest first, auto-dismissed after a fixed delay
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Notice>,
    dismiss_after: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_DISMISS_SECS))
    }
}

impl ToastQueue {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            dismiss_after,
        }
    }

    /// Toasts still visible at `now`
    pub fn active(&self, now: DateTime<Utc>) -> Vec<&Notice> {
        self.toasts
            .iter()
            .filter(|t| now - t.created_at < self.dismiss_after)
            .collect()
    }

    /// Drop toasts whose delay has elapsed
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let dismiss_after = self.dismiss_after;
        self.toasts.retain(|t| now - t.created_at < dismiss_after);
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.toasts.first()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notice: Notice) {
        self.toasts.insert(0, notice);
        self.toasts.truncate(TOAST_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_texts() {
        let full = Notice::new(NoticeKind::ListFull);
        assert_eq!(full.title, "Comparison list full");
        assert_eq!(full.variant, NoticeVariant::Destructive);

        let dup = Notice::new(NoticeKind::AlreadyPresent);
        assert_eq!(dup.title, "Already in comparison");
        assert_ne!(dup.id, full.id);
    }

    #[test]
    fn test_newest_toast_replaces_older() {
        let mut queue = ToastQueue::default();
        queue.notify(Notice::new(NoticeKind::Added));
        queue.notify(Notice::new(NoticeKind::Removed));

        assert_eq!(queue.active(Utc::now()).len(), 1);
        assert_eq!(queue.latest().map(|t| t.kind), Some(NoticeKind::Removed));
    }

    #[test]
    fn test_toast_auto_dismisses() {
        let start = Utc::now();
        let mut queue = ToastQueue::new(Duration::seconds(5));
        queue.notify(Notice::at(NoticeKind::Added, start));

        assert_eq!(queue.active(start + Duration::seconds(4)).len(), 1);
        assert!(queue.active(start + Duration::seconds(5)).is_empty());

        queue.prune(start + Duration::seconds(6));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let notice = Notice::new(NoticeKind::Cleared);
        let id = notice.id.clone();
        queue.notify(notice);
        queue.dismiss(&id);
        assert!(queue.is_empty());
    }
}
