use crate::io::shelf_io::Shelf;
use crate::model::film::Film;
use crate::model::item::{ItemId, ListItem};
use crate::model::todo::Todo;
use crate::store::list_store::ListStore;

/// Transient edit-mode state. At most one item is under edit at a time, and
/// this state is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode<F> {
    Viewing,
    Editing { id: ItemId, draft: F },
}

/// A list store plus its edit-mode state machine.
///
/// This is the whole boundary the presentation layer talks to: `add`,
/// `delete`, `toggle` (todos), `begin_edit`, `set_draft`, `commit_edit`.
/// Commit always runs the update operation and returns to `Viewing`, whether
/// or not the draft changed; a draft that fails validation leaves the item
/// untouched but still exits edit mode.
pub struct Session<I: ListItem> {
    store: ListStore<I>,
    edit: EditMode<I::Fields>,
}

impl<I: ListItem> Session<I> {
    pub fn new(store: ListStore<I>) -> Session<I> {
        Session {
            store,
            edit: EditMode::Viewing,
        }
    }

    pub fn items(&self) -> &[I] {
        self.store.items()
    }

    pub fn get(&self, id: ItemId) -> Option<&I> {
        self.store.get(id)
    }

    pub fn mode(&self) -> &EditMode<I::Fields> {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        match &self.edit {
            EditMode::Editing { id, .. } => Some(*id),
            EditMode::Viewing => None,
        }
    }

    pub fn add(&mut self, fields: &I::Fields) -> &[I] {
        self.store.add(fields)
    }

    /// Delete an item. Deleting the item currently under edit resets the
    /// session to `Viewing`; the orphaned draft is dropped.
    pub fn delete(&mut self, id: ItemId) -> &[I] {
        if self.editing_id() == Some(id) {
            self.edit = EditMode::Viewing;
        }
        self.store.delete(id)
    }

    /// Enter edit mode on `id`, initializing the draft from the item's
    /// current fields. Unknown ids are a no-op. Switching away from an open
    /// edit commits that draft first.
    pub fn begin_edit(&mut self, id: ItemId) {
        match self.editing_id() {
            Some(open) if open == id => return,
            Some(_) => {
                self.commit_edit();
            }
            None => {}
        }
        if let Some(item) = self.store.get(id) {
            self.edit = EditMode::Editing {
                id,
                draft: item.fields(),
            };
        }
    }

    /// Replace the open draft. No-op while `Viewing`.
    pub fn set_draft(&mut self, fields: I::Fields) {
        if let EditMode::Editing { draft, .. } = &mut self.edit {
            *draft = fields;
        }
    }

    /// Commit the open draft through the update operation and return to
    /// `Viewing`. No-op while `Viewing`.
    pub fn commit_edit(&mut self) -> &[I] {
        match std::mem::replace(&mut self.edit, EditMode::Viewing) {
            EditMode::Editing { id, draft } => self.store.update(id, &draft),
            EditMode::Viewing => self.store.items(),
        }
    }
}

impl Session<Todo> {
    pub fn toggle(&mut self, id: ItemId) -> &[Todo] {
        self.store.toggle(id)
    }
}

/// Open the todo session for a shelf.
pub fn open_todos(shelf: &Shelf) -> Session<Todo> {
    Session::new(ListStore::open(shelf.storage(), Vec::new()))
}

/// Open the film session for a shelf. Seeding honors the `[films] seed`
/// config switch.
pub fn open_films(shelf: &Shelf) -> Session<Film> {
    let seed = if shelf.config.films.seed {
        Film::seed()
    } else {
        Vec::new()
    };
    Session::new(ListStore::open(shelf.storage(), seed))
}
