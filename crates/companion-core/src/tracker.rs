//! Character and thread tracking with random selection.

use rand::rngs::StdRng;

use crate::list::ItemList;
use crate::log::OutputLog;

/// Which tracker list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Player and non-player characters.
    Character,
    /// Open plot threads.
    Thread,
}

impl ItemKind {
    /// Both kinds in display order.
    pub const ALL: [ItemKind; 2] = [ItemKind::Character, ItemKind::Thread];

    /// Lowercase noun used in selection messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Thread => "thread",
        }
    }

    /// The other list.
    pub fn other(self) -> Self {
        match self {
            Self::Character => Self::Thread,
            Self::Thread => Self::Character,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character => write!(f, "Characters"),
            Self::Thread => write!(f, "Threads"),
        }
    }
}

/// Format the log line for a random pick.
pub fn selection_message(kind: ItemKind, item: &str) -> String {
    format!("Selected {}: {item}", kind.noun())
}

/// State of the characters & threads panel.
///
/// Each list has its own pending input buffer, the text the user has typed
/// but not yet submitted. Selections are prepended to a shared output log.
#[derive(Debug, Clone, Default)]
pub struct TrackerPanel {
    characters: ItemList,
    threads: ItemList,
    character_input: String,
    thread_input: String,
    output: OutputLog,
}

impl TrackerPanel {
    /// Create a panel with empty lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// The list for `kind`.
    pub fn list(&self, kind: ItemKind) -> &ItemList {
        match kind {
            ItemKind::Character => &self.characters,
            ItemKind::Thread => &self.threads,
        }
    }

    fn list_mut(&mut self, kind: ItemKind) -> &mut ItemList {
        match kind {
            ItemKind::Character => &mut self.characters,
            ItemKind::Thread => &mut self.threads,
        }
    }

    /// Pending input text for `kind`.
    pub fn input(&self, kind: ItemKind) -> &str {
        match kind {
            ItemKind::Character => &self.character_input,
            ItemKind::Thread => &self.thread_input,
        }
    }

    /// Mutable pending input buffer for `kind`.
    pub fn input_mut(&mut self, kind: ItemKind) -> &mut String {
        match kind {
            ItemKind::Character => &mut self.character_input,
            ItemKind::Thread => &mut self.thread_input,
        }
    }

    /// Add `raw` directly to the list. Returns `true` if it was accepted.
    pub fn add(&mut self, kind: ItemKind, raw: &str) -> bool {
        let added = self.list_mut(kind).add(raw);
        if added {
            tracing::debug!(kind = kind.noun(), len = self.list(kind).len(), "item added");
        }
        added
    }

    /// Submit the pending input for `kind`.
    ///
    /// On success the input buffer is cleared. A rejected submission leaves
    /// the buffer as typed.
    pub fn add_pending(&mut self, kind: ItemKind) -> bool {
        let raw = std::mem::take(self.input_mut(kind));
        if self.add(kind, &raw) {
            true
        } else {
            *self.input_mut(kind) = raw;
            false
        }
    }

    /// Delete the item at `index` from the list for `kind`.
    pub fn delete(&mut self, kind: ItemKind, index: usize) -> Option<String> {
        let removed = self.list_mut(kind).delete(index);
        if let Some(ref name) = removed {
            tracing::debug!(kind = kind.noun(), index, name = %name, "item deleted");
        }
        removed
    }

    /// Whether a random pick is possible for `kind`.
    pub fn can_choose(&self, kind: ItemKind) -> bool {
        !self.list(kind).is_empty()
    }

    /// Pick a random item from `kind` and prepend the result to the log.
    ///
    /// Does nothing on an empty list. Returns the selected item.
    pub fn choose_random(&mut self, kind: ItemKind, rng: &mut StdRng) -> Option<String> {
        let picked = self.list(kind).pick(rng)?.to_string();
        self.output.prepend(selection_message(kind, &picked));
        tracing::debug!(kind = kind.noun(), picked = %picked, "random selection");
        Some(picked)
    }

    /// The output log.
    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    /// Empty the output log.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}
