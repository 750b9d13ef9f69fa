//! # Document Host
//!
//! The page-level resources views may hold while mounted: the body scroll
//! lock and document key listeners.
//!
//! ## Scoped Effects
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Acquire / Release Pairing                              │
//! │                                                                         │
//! │  document.lock_scroll()        ──► ScrollLock        (drop = unlock)    │
//! │  document.add_key_listener(f)  ──► KeyListenerGuard  (drop = detach)    │
//! │                                                                         │
//! │  A view keeps the guards for exactly as long as the effect should be    │
//! │  live. Every exit path (state change, unmount, early return) drops      │
//! │  them, so the document can never be left locked.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// A key as delivered to document listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "enter" | "return" => Key::Enter,
            _ => Key::Other(name.trim().to_string()),
        }
    }
}

/// Body overflow style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Unset,
    Hidden,
}

type KeyHandler = Arc<dyn Fn(&Key) + Send + Sync>;

#[derive(Default)]
struct DocumentInner {
    scroll_locks: usize,
    listeners: Vec<(u64, KeyHandler)>,
    next_listener_id: u64,
}

/// Shared handle to the page document. Clones refer to the same document.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<Mutex<DocumentInner>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> MutexGuard<'_, DocumentInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn body_overflow(&self) -> Overflow {
        if self.inner().scroll_locks > 0 {
            Overflow::Hidden
        } else {
            Overflow::Unset
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.body_overflow() == Overflow::Hidden
    }

    pub fn key_listener_count(&self) -> usize {
        self.inner().listeners.len()
    }

    /// Hides body overflow until the returned guard is dropped.
    ///
    /// Locks nest; the body scrolls again once every guard is gone.
    #[must_use = "the scroll lock is released as soon as the guard is dropped"]
    pub fn lock_scroll(&self) -> ScrollLock {
        let mut inner = self.inner();
        inner.scroll_locks += 1;
        debug!(locks = inner.scroll_locks, "Body scroll locked");

        ScrollLock {
            document: self.clone(),
        }
    }

    /// Registers a key listener until the returned guard is dropped.
    #[must_use = "the listener is detached as soon as the guard is dropped"]
    pub fn add_key_listener<F>(&self, handler: F) -> KeyListenerGuard
    where
        F: Fn(&Key) + Send + Sync + 'static,
    {
        let mut inner = self.inner();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(handler)));
        debug!(listener_id = id, "Key listener attached");

        KeyListenerGuard {
            document: self.clone(),
            id,
        }
    }

    /// Delivers `key` to every listener attached at the time of the call.
    ///
    /// Handlers run without the document lock held, so they may attach or
    /// detach listeners themselves.
    ///
    /// ## Returns
    /// The number of listeners notified.
    pub fn dispatch_key(&self, key: &Key) -> usize {
        let handlers: Vec<KeyHandler> = self
            .inner()
            .listeners
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in &handlers {
            handler(key);
        }

        debug!(?key, listeners = handlers.len(), "Key dispatched");
        handlers.len()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner();
        f.debug_struct("Document")
            .field("scroll_locks", &inner.scroll_locks)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Releases one body scroll lock on drop.
#[derive(Debug)]
pub struct ScrollLock {
    document: Document,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let mut inner = self.document.inner();
        inner.scroll_locks = inner.scroll_locks.saturating_sub(1);
        debug!(locks = inner.scroll_locks, "Body scroll lock released");
    }
}

/// Detaches one key listener on drop.
#[derive(Debug)]
pub struct KeyListenerGuard {
    document: Document,
    id: u64,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        let id = self.id;
        self.document.inner().listeners.retain(|(lid, _)| *lid != id);
        debug!(listener_id = id, "Key listener detached");
    }
}
