use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::storage::{FailingStorage, KeyValueStore, MemoryStorage};

const KEY: &str = "userHubTheme";

fn memory() -> Rc<MemoryStorage> {
    Rc::new(MemoryStorage::new())
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_known_values_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" dark\n"), Some(Theme::Dark));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_toggle_label_names_target_theme() {
    assert_eq!(Theme::Light.toggle_label(), "🌙 Dark");
    assert_eq!(Theme::Dark.toggle_label(), "☀️ Light");
}

// =============================================================
// ThemeStore loading
// =============================================================

#[test]
fn load_without_preference_is_light() {
    let store = ThemeStore::load(memory(), KEY);
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn load_reads_persisted_preference() {
    let storage = memory();
    storage.set_item(KEY, "dark").unwrap();
    let store = ThemeStore::load(storage, KEY);
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn load_ignores_unknown_preference() {
    let storage = memory();
    storage.set_item(KEY, "neon").unwrap();
    assert_eq!(ThemeStore::load(storage, KEY).theme(), Theme::Light);
}

#[test]
fn load_with_unavailable_storage_is_light() {
    let store = ThemeStore::load(Rc::new(FailingStorage), KEY);
    assert_eq!(store.theme(), Theme::Light);
}

// =============================================================
// Toggle, persistence, observers
// =============================================================

#[test]
fn toggle_twice_restores_theme_and_persists_each_step() {
    let storage = memory();
    let mut store = ThemeStore::load(storage.clone(), KEY);

    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some(store.theme().as_str()));

    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn toggle_survives_reload() {
    let storage = memory();
    ThemeStore::load(storage.clone(), KEY).toggle();
    assert_eq!(ThemeStore::load(storage, KEY).theme(), Theme::Dark);
}

#[test]
fn toggle_with_unavailable_storage_still_flips_in_memory() {
    let mut store = ThemeStore::load(Rc::new(FailingStorage), KEY);
    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.toggle(), Theme::Light);
}

#[test]
fn toggle_notifies_every_observer_before_returning() {
    let mut store = ThemeStore::load(memory(), KEY);
    let seen_a = Rc::new(RefCell::new(Vec::new()));
    let seen_b = Rc::new(RefCell::new(Vec::new()));
    let a = seen_a.clone();
    let b = seen_b.clone();
    store.subscribe(move |t| a.borrow_mut().push(t));
    store.subscribe(move |t| b.borrow_mut().push(t));

    store.toggle();
    assert_eq!(*seen_a.borrow(), vec![Theme::Dark]);
    assert_eq!(*seen_b.borrow(), vec![Theme::Dark]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut store = ThemeStore::load(memory(), KEY);
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    let id = store.subscribe(move |_| *c.borrow_mut() += 1);

    store.toggle();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle();

    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.observer_count(), 0);
}

#[test]
fn set_same_theme_still_persists() {
    let storage = memory();
    let mut store = ThemeStore::load(storage.clone(), KEY);
    store.set(Theme::Light);
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("light"));
}
