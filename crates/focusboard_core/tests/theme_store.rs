use focusboard_core::{KeyValueStorage, MemoryStorage, Theme, ThemeStore, THEME_STORAGE_KEY};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn defaults_to_dark_without_stored_value() {
    let storage = Rc::new(MemoryStorage::new());
    let store = ThemeStore::open(storage.clone()).unwrap();

    assert_eq!(store.current(), Theme::Dark);
    assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap(), None);
}

#[test]
fn toggle_persists_and_notifies() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = ThemeStore::open(storage.clone()).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    store.subscribe(move |theme: &Theme| log.borrow_mut().push(*theme));

    assert_eq!(store.toggle().unwrap(), Theme::Light);
    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("light")
    );
    assert_eq!(store.toggle().unwrap(), Theme::Dark);

    assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light, Theme::Dark]);
}

#[test]
fn stored_preference_is_loaded() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_item(THEME_STORAGE_KEY, "light").unwrap();
    assert_eq!(ThemeStore::open(storage).unwrap().current(), Theme::Light);
}

#[test]
fn unknown_stored_value_falls_back_to_dark() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_item(THEME_STORAGE_KEY, "sepia").unwrap();
    assert_eq!(ThemeStore::open(storage).unwrap().current(), Theme::Dark);
}
