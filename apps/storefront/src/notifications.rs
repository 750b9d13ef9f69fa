//! # Toast Notifications
//!
//! Confirmations raised by views after a cart operation succeeds. The cart
//! store itself never produces messages; callers decide what to say.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A bounded toast queue. The oldest toast is evicted when full.
#[derive(Debug, Clone)]
pub struct Toaster {
    queue: VecDeque<Toast>,
    capacity: usize,
}

impl Toaster {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Toaster {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// "`name` added to cart"
    pub fn added(&mut self, product_name: &str) {
        self.success(format!("{} added to cart", product_name));
    }

    /// "`name` removed from cart"
    pub fn removed(&mut self, product_name: &str) {
        self.success(format!("{} removed from cart", product_name));
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            kind,
            message,
            created_at: Utc::now(),
        });
    }

    /// Takes every pending toast, oldest first.
    pub fn drain(&mut self) -> Vec<Toast> {
        self.queue.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_messages() {
        let mut toaster = Toaster::new(3);
        toaster.added("Sipa Set");
        toaster.removed("Sipa Set");

        let messages: Vec<_> = toaster.drain().into_iter().map(|t| t.message).collect();
        assert_eq!(
            messages,
            vec!["Sipa Set added to cart", "Sipa Set removed from cart"]
        );
        assert!(toaster.is_empty());
    }

    #[test]
    fn test_oldest_evicted_when_full() {
        let mut toaster = Toaster::new(2);
        toaster.success("one");
        toaster.success("two");
        toaster.error("three");

        let pending = toaster.drain();
        let messages: Vec<_> = pending.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(pending.last().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut toaster = Toaster::new(0);
        toaster.success("a");
        toaster.success("b");
        assert_eq!(toaster.drain().len(), 1);
    }
}
