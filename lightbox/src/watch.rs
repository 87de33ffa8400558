use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::StateKey;
use crate::engine::Engine;

/// Handle for a registered watcher; pass to [`Engine::unwatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatcherId(pub(crate) u64);

/// Callback fired after an event flush with the deduplicated, sorted dirty
/// key set.
///
/// Callbacks observe the engine read-only. Mutations (including draining the
/// load plan) happen from the caller after the event returns, never from
/// inside a notification.
pub type WatchCallback = Arc<dyn Fn(&Engine, &[StateKey]) + Send + Sync>;

/// Which item keys a watcher cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ItemInterest {
    #[default]
    None,
    All,
    Keys(Vec<usize>),
}

/// Key filter for a watcher.
///
/// Components subscribe to exactly the state they read; events that only
/// dirty other keys never reach them. An item renderer, for instance,
/// watches `Item(index)` for its own index and nothing else, so scroll
/// traffic cannot re-render it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interest {
    pub view_count: bool,
    pub viewport: bool,
    pub scroll_offset: bool,
    pub resizing: bool,
    pub segments: bool,
    pub list_height: bool,
    pub items: ItemInterest,
}

impl Interest {
    /// Matches every key.
    pub fn all() -> Self {
        Self {
            view_count: true,
            viewport: true,
            scroll_offset: true,
            resizing: true,
            segments: true,
            list_height: true,
            items: ItemInterest::All,
        }
    }

    pub fn with_view_count(mut self) -> Self {
        self.view_count = true;
        self
    }

    pub fn with_viewport(mut self) -> Self {
        self.viewport = true;
        self
    }

    pub fn with_scroll_offset(mut self) -> Self {
        self.scroll_offset = true;
        self
    }

    pub fn with_resizing(mut self) -> Self {
        self.resizing = true;
        self
    }

    pub fn with_segments(mut self) -> Self {
        self.segments = true;
        self
    }

    pub fn with_list_height(mut self) -> Self {
        self.list_height = true;
        self
    }

    pub fn with_items(mut self, items: ItemInterest) -> Self {
        self.items = items;
        self
    }

    pub(crate) fn matches(&self, key: &StateKey) -> bool {
        match key {
            StateKey::ViewCount => self.view_count,
            StateKey::Viewport => self.viewport,
            StateKey::ScrollOffset => self.scroll_offset,
            StateKey::Resizing => self.resizing,
            StateKey::Segments => self.segments,
            StateKey::ListHeight => self.list_height,
            StateKey::Item(index) => match &self.items {
                ItemInterest::None => false,
                ItemInterest::All => true,
                ItemInterest::Keys(keys) => keys.contains(index),
            },
        }
    }

    pub(crate) fn matches_any(&self, dirty: &[StateKey]) -> bool {
        dirty.iter().any(|key| self.matches(key))
    }
}

/// Watcher registry with interest-filtered dispatch.
#[derive(Clone, Default)]
pub(crate) struct Watchers {
    next_id: u64,
    entries: Vec<(WatcherId, Interest, WatchCallback)>,
}

impl Watchers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn subscribe(&mut self, interest: Interest, callback: WatchCallback) -> WatcherId {
        let id = WatcherId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, interest, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: WatcherId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn publish(&self, engine: &Engine, dirty: &[StateKey]) {
        for (_, interest, callback) in &self.entries {
            if interest.matches_any(dirty) {
                callback(engine, dirty);
            }
        }
    }
}

impl fmt::Debug for Watchers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watchers")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
