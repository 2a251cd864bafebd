//! Round-trip coverage for the key-value storage and the list store,
//! exercised through the public API.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use shelf::io::storage::Storage;
use shelf::model::item::ListItem;
use shelf::model::{Film, FilmFields, Todo};
use shelf::store::list_store::ListStore;

#[test]
fn storage_round_trips_awkward_text() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path());

    let todos = vec![
        Todo::new(1, "quotes \"inside\" and a \\ backslash").unwrap(),
        Todo::new(2, "unicode: cafe\u{0301} — 七人の侍").unwrap(),
        Todo::new(3, "line\nbreak").unwrap(),
    ];
    storage.write("todos", &todos).unwrap();

    let loaded: Vec<Todo> = storage.load("todos").unwrap();
    assert_eq!(loaded, todos);
}

#[test]
fn storage_round_trips_films() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path());

    let films = Film::seed();
    storage.write("films", &films).unwrap();

    let loaded: Vec<Film> = storage.load("films").unwrap();
    assert_eq!(loaded, films);
}

#[test]
fn fresh_film_store_returns_the_boilerplate_guide() {
    let dir = TempDir::new().unwrap();
    let store: ListStore<Film> = ListStore::open(Storage::new(dir.path()), Film::seed());

    let flags: Vec<(&str, bool)> = store
        .items()
        .iter()
        .map(|f| (f.title.as_str(), f.is_best))
        .collect();
    assert_eq!(
        flags,
        vec![
            ("Seven Samurai", true),
            ("Spirited Away", true),
            ("Rashomon", false),
            ("Your Name", false),
        ]
    );
}

#[test]
fn store_state_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut store: ListStore<Film> = ListStore::open(Storage::new(dir.path()), Film::seed());
        store.add(&FilmFields::new("Ikiru", "A bureaucrat learns to live."));
        store.delete(4);
    }

    let store: ListStore<Film> = ListStore::open(Storage::new(dir.path()), Film::seed());
    let titles: Vec<&str> = store.items().iter().map(|f| f.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Seven Samurai", "Spirited Away", "Rashomon", "Ikiru"]
    );
}

#[test]
fn malformed_store_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("films.json"), "[{\"id\": broken").unwrap();

    let store: ListStore<Film> = ListStore::open(Storage::new(dir.path()), Film::seed());
    assert_eq!(store.items().len(), 4);
}

#[test]
fn added_ids_never_collide_with_seed_ids() {
    let dir = TempDir::new().unwrap();
    let mut store: ListStore<Film> = ListStore::open(Storage::new(dir.path()), Film::seed());
    store.add(&FilmFields::new("Ikiru", "A bureaucrat learns to live."));

    let mut ids: Vec<i64> = store.items().iter().map(|f| f.id()).collect();
    let len = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), len);
}
