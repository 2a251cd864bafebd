use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::io::storage::Storage;
use crate::model::item::{ItemId, ListItem};
use crate::model::todo::Todo;
use crate::ops::list_ops;

/// The canonical ordered list of one item kind, kept synchronized with its
/// storage key. Owns the only authoritative copy of the sequence; every
/// mutation replaces it wholesale and writes it through.
pub struct ListStore<I: ListItem> {
    storage: Storage,
    items: Vec<I>,
}

impl<I: ListItem> ListStore<I> {
    /// Open the store: the persisted sequence, or `seed` when nothing usable
    /// is stored. The seed is not written back until the first mutation.
    pub fn open(storage: Storage, seed: Vec<I>) -> ListStore<I> {
        let items = storage.load(I::STORE_KEY).unwrap_or(seed);
        ListStore { storage, items }
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&I> {
        list_ops::find(&self.items, id)
    }

    pub fn add(&mut self, fields: &I::Fields) -> &[I] {
        self.apply(list_ops::add(&self.items, fields))
    }

    pub fn delete(&mut self, id: ItemId) -> &[I] {
        self.apply(list_ops::delete(&self.items, id))
    }

    pub fn update(&mut self, id: ItemId, fields: &I::Fields) -> &[I] {
        self.apply(list_ops::update(&self.items, id, fields))
    }

    /// Install the new sequence and write it through. A failed write is
    /// silent at this boundary: in-memory state moves on and the serialized
    /// sequence goes to the recovery log so it isn't lost outright.
    fn apply(&mut self, next: Vec<I>) -> &[I] {
        self.items = next;
        if let Err(e) = self.storage.write(I::STORE_KEY, &self.items) {
            recovery::log_recovery(
                self.storage.dir(),
                RecoveryEntry {
                    timestamp: chrono::Utc::now(),
                    category: RecoveryCategory::Write,
                    description: "store write failed".to_string(),
                    fields: vec![
                        ("Key".to_string(), I::STORE_KEY.to_string()),
                        ("Error".to_string(), e.to_string()),
                    ],
                    body: serde_json::to_string(&self.items).unwrap_or_default(),
                },
            );
        }
        &self.items
    }
}

impl ListStore<Todo> {
    pub fn toggle(&mut self, id: ItemId) -> &[Todo] {
        self.apply(list_ops::toggle(&self.items, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::film::Film;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> Storage {
        Storage::new(dir.path())
    }

    #[test]
    fn empty_storage_yields_seed_without_persisting_it() {
        let dir = TempDir::new().unwrap();
        let store: ListStore<Film> = ListStore::open(storage(&dir), Film::seed());
        assert_eq!(store.items().len(), 4);

        // Nothing written yet: reopening with a different seed shows the
        // difference.
        let store: ListStore<Film> = ListStore::open(storage(&dir), Vec::new());
        assert!(store.items().is_empty());
    }

    #[test]
    fn mutations_write_through() {
        let dir = TempDir::new().unwrap();
        let mut store: ListStore<Todo> = ListStore::open(storage(&dir), Vec::new());
        store.add(&"Buy milk".to_string());
        let id = store.items()[0].id;
        store.toggle(id);

        let reopened: ListStore<Todo> = ListStore::open(storage(&dir), Vec::new());
        assert_eq!(reopened.items().len(), 1);
        assert_eq!(reopened.items()[0].text, "Buy milk");
        assert!(reopened.items()[0].done);
    }

    #[test]
    fn stored_value_wins_over_seed() {
        let dir = TempDir::new().unwrap();
        let mut store: ListStore<Film> = ListStore::open(storage(&dir), Film::seed());
        store.delete(3);
        store.delete(4);

        let reopened: ListStore<Film> = ListStore::open(storage(&dir), Film::seed());
        assert_eq!(reopened.items().len(), 2);
    }

    #[test]
    fn delete_then_reopen_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store: ListStore<Todo> = ListStore::open(storage(&dir), Vec::new());
        store.add(&"Buy milk".to_string());
        let id = store.items()[0].id;
        store.delete(id);

        let reopened: ListStore<Todo> = ListStore::open(storage(&dir), Vec::new());
        assert!(reopened.items().is_empty());
    }
}
