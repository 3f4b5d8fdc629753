use std::collections::HashMap;

use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::Record;

/// Collection-level load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
}

/// Per-item activity. `Editing` is derived from an open draft; `Saving` and
/// `Deleting` mark an outstanding gateway call and double as the debounce
/// guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemActivity {
    Clean,
    Editing,
    Saving,
    Deleting,
}

/// In-memory working state of one collection: the authoritative local list,
/// open edit drafts, and which items have a gateway call outstanding.
///
/// Purely synchronous; the controller drives it under a lock and performs
/// the actual gateway round trips between transitions.
pub struct Workspace<R: Record> {
    state: LoadState,
    items: Vec<R>,
    drafts: HashMap<Identity, R>,
    in_flight: HashMap<Identity, ItemActivity>,
}

impl<R: Record> Workspace<R> {
    pub fn new() -> Self {
        Workspace {
            state: LoadState::Unloaded,
            items: Vec::new(),
            drafts: HashMap::new(),
            in_flight: HashMap::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn activity(&self, id: Identity) -> ItemActivity {
        if let Some(op) = self.in_flight.get(&id) {
            return *op;
        }
        if self.drafts.contains_key(&id) {
            return ItemActivity::Editing;
        }
        ItemActivity::Clean
    }

    pub fn begin_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Install a fetched collection as the new source of truth.
    /// Last-fetch-wins: optimistic edits already applied to the list are
    /// discarded, open drafts survive so a retry is still possible.
    pub fn install(&mut self, items: Vec<R>) {
        self.items = items;
        self.state = LoadState::Loaded;
    }

    /// Materialize a blank record with a pending identity, append it to the
    /// local list and open a draft for it. Nothing reaches the gateway until
    /// the draft is saved.
    pub fn begin_create(&mut self) -> R {
        let mut record = R::blank();
        if record.display_order().is_some() {
            record.set_display_order(self.next_display_order());
        }
        self.items.push(record.clone());
        self.drafts.insert(record.identity(), record.clone());
        record
    }

    /// Deep-copy an item into a draft. The list entry stays untouched until
    /// a save succeeds, so discarding the draft is a true no-op.
    pub fn begin_edit(&mut self, id: Identity) -> Option<R> {
        let item = self.items.iter().find(|r| r.identity() == id)?.clone();
        self.drafts.insert(id, item.clone());
        Some(item)
    }

    pub fn discard(&mut self, id: Identity) -> bool {
        self.drafts.remove(&id).is_some()
    }

    /// Keep a failed save attempt around as the open draft so the operator
    /// can retry without retyping.
    pub fn stash_draft(&mut self, id: Identity, draft: R) {
        self.drafts.insert(id, draft);
    }

    /// Reserve an item for a save/delete round trip. Returns false when one
    /// is already outstanding for the same identity (double-submit guard).
    pub fn reserve(&mut self, id: Identity, op: ItemActivity) -> bool {
        debug_assert!(matches!(op, ItemActivity::Saving | ItemActivity::Deleting));
        if self.in_flight.contains_key(&id) {
            return false;
        }
        self.in_flight.insert(id, op);
        true
    }

    pub fn release(&mut self, id: Identity) {
        self.in_flight.remove(&id);
    }

    /// Fold the authoritative saved record back into the list: replace the
    /// entry matching the pre-save identity, or append when the list no
    /// longer holds it. Consumes the draft.
    pub fn reconcile(&mut self, pre_save: Identity, canonical: R) {
        self.drafts.remove(&pre_save);
        match self.items.iter().position(|r| r.identity() == pre_save) {
            Some(index) => self.items[index] = canonical,
            None => self.items.push(canonical),
        }
    }

    /// Optimistically remove an item, returning its index and value so a
    /// failed remote delete can put it back where it was.
    pub fn remove(&mut self, id: Identity) -> Option<(usize, R)> {
        let index = self.items.iter().position(|r| r.identity() == id)?;
        self.drafts.remove(&id);
        Some((index, self.items.remove(index)))
    }

    /// Roll back an optimistic removal.
    pub fn restore(&mut self, index: usize, record: R) {
        let index = index.min(self.items.len());
        self.items.insert(index, record);
    }

    /// Move an item to a new position and renumber `display_order` to match
    /// the visible sequence. Returns the records whose order changed.
    pub fn reorder(&mut self, id: Identity, new_index: usize) -> Option<Vec<R>> {
        let from = self.items.iter().position(|r| r.identity() == id)?;
        let to = new_index.min(self.items.len().saturating_sub(1));
        let record = self.items.remove(from);
        self.items.insert(to, record);

        let mut changed = Vec::new();
        for (position, item) in self.items.iter_mut().enumerate() {
            let order = position as i32 + 1;
            if item.display_order() != Some(order) {
                item.set_display_order(order);
                changed.push(item.clone());
            }
        }
        Some(changed)
    }

    fn next_display_order(&self) -> i32 {
        self.items
            .iter()
            .filter_map(|r| r.display_order())
            .max()
            .map(|max| max + 1)
            .unwrap_or(1)
    }
}

impl<R: Record> Default for Workspace<R> {
    fn default() -> Self {
        Self::new()
    }
}
