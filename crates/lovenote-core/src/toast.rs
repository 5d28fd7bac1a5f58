//! Toast notifications.
//!
//! The [`Toaster`] handles queuing and dismissal. At most [`MAX_VISIBLE`]
//! toasts are on screen; the rest wait in a queue and are promoted when a
//! visible toast goes away. Expiry is driven by the state machine, which
//! schedules a [`Cue::ExpireToast`](crate::Cue::ExpireToast) per toast.

use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Identifier for a toast, unique within one [`Toaster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Determines icon and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for this kind
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "⚠️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    lifetime: Duration,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

/// Manages the toast queue and visible toasts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toaster {
    /// Currently visible toasts (oldest first, rendered bottom-up)
    visible: VecDeque<Toast>,
    /// Toasts waiting for a free slot
    queue: VecDeque<Toast>,
    next_id: u64,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast and returns its id.
    ///
    /// Returns `(id, shown)` where `shown` tells whether the toast went
    /// straight on screen (and so should start its expiry timer now).
    pub fn push(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        lifetime: Duration,
    ) -> (ToastId, bool) {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let toast = Toast {
            id,
            kind,
            message: message.into(),
            lifetime,
        };

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(toast);
            (id, true)
        } else {
            self.queue.push_back(toast);
            (id, false)
        }
    }

    /// Removes a toast by id.
    ///
    /// Returns the toasts promoted from the queue as a result, so their
    /// expiry timers can be started. `None` when the id was not found.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Vec<Toast>> {
        if let Some(pos) = self.visible.iter().position(|t| t.id == id) {
            self.visible.remove(pos);
            return Some(self.promote_from_queue());
        }

        if let Some(pos) = self.queue.iter().position(|t| t.id == id) {
            self.queue.remove(pos);
            return Some(Vec::new());
        }

        None
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) -> Vec<Toast> {
        let mut promoted = Vec::new();
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(toast) => {
                    promoted.push(toast.clone());
                    self.visible.push_back(toast);
                }
                None => break,
            }
        }
        promoted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFE: Duration = Duration::from_secs(3);

    #[test]
    fn new_toaster_is_empty() {
        let toaster = Toaster::new();
        assert!(toaster.is_empty());
        assert_eq!(toaster.visible_count(), 0);
    }

    #[test]
    fn push_shows_until_full_then_queues() {
        let mut toaster = Toaster::new();
        for _ in 0..MAX_VISIBLE {
            let (_, shown) = toaster.push(ToastKind::Success, "ok", LIFE);
            assert!(shown);
        }
        let (_, shown) = toaster.push(ToastKind::Error, "overflow", LIFE);
        assert!(!shown);
        assert_eq!(toaster.visible_count(), MAX_VISIBLE);
        assert_eq!(toaster.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_queued_toast() {
        let mut toaster = Toaster::new();
        let (first, _) = toaster.push(ToastKind::Success, "a", LIFE);
        toaster.push(ToastKind::Success, "b", LIFE);
        toaster.push(ToastKind::Success, "c", LIFE);
        let (queued, _) = toaster.push(ToastKind::Error, "d", LIFE);

        let promoted = toaster.dismiss(first).unwrap();
        assert_eq!(promoted.len(), 1);
        assert_eq!(promoted[0].id(), queued);
        assert_eq!(promoted[0].message(), "d");
        assert_eq!(toaster.queued_count(), 0);
    }

    #[test]
    fn dismiss_unknown_returns_none() {
        let mut toaster = Toaster::new();
        let (id, _) = toaster.push(ToastKind::Success, "a", LIFE);
        assert!(toaster.dismiss(id).is_some());
        assert!(toaster.dismiss(id).is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut toaster = Toaster::new();
        let (a, _) = toaster.push(ToastKind::Success, "a", LIFE);
        let (b, _) = toaster.push(ToastKind::Success, "b", LIFE);
        assert_ne!(a, b);
    }

    #[test]
    fn kind_classes() {
        assert_eq!(ToastKind::Success.class(), "toast--success");
        assert_eq!(ToastKind::Error.class(), "toast--error");
    }
}
