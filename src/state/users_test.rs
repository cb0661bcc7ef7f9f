use super::*;

fn named(id: u64, name: &str) -> User {
    User { id, name: name.to_owned(), ..User::default() }
}

fn directory() -> Vec<User> {
    vec![named(1, "Leanne Graham"), named(2, "Ervin Howell"), named(3, "Clementine Bauch")]
}

fn names(users: &[&User]) -> Vec<String> {
    users.iter().map(|u| u.name.clone()).collect()
}

#[test]
fn filter_matches_substring_case_insensitively_in_order() {
    let users = directory();
    assert_eq!(names(&filter_users(&users, "ne")), vec!["Leanne Graham", "Clementine Bauch"]);
}

#[test]
fn filter_ignores_query_case() {
    let users = directory();
    assert_eq!(names(&filter_users(&users, "ERVIN")), vec!["Ervin Howell"]);
}

#[test]
fn filter_empty_query_returns_everyone() {
    let users = directory();
    assert_eq!(filter_users(&users, "").len(), 3);
}

#[test]
fn filter_without_match_is_empty() {
    let users = directory();
    assert!(filter_users(&users, "zz").is_empty());
}

#[test]
fn filter_leaves_source_untouched() {
    let users = directory();
    let _ = filter_users(&users, "ne");
    assert_eq!(users, directory());
}

#[test]
fn users_state_default_is_loading_with_empty_query() {
    let state = UsersState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(state.query.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn users_state_visible_applies_query() {
    let state = UsersState { items: directory(), loading: false, query: "how".to_owned(), ..UsersState::default() };
    assert_eq!(state.visible(), vec![named(2, "Ervin Howell")]);
}

#[test]
fn finish_load_success_stores_items_in_order() {
    let mut state = UsersState::default();
    state.finish_load(Ok(directory()));
    assert!(!state.loading);
    assert_eq!(state.items, directory());
    assert!(state.error.is_none());
}

#[test]
fn finish_load_failure_sets_error_and_stops_loading() {
    let mut state = UsersState::default();
    state.finish_load(Err(FetchError::Network("offline".to_owned())));
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some(LIST_FAILED_MESSAGE));
    assert!(!state.shows_no_match());
}

#[test]
fn shows_no_match_only_after_load_with_empty_result() {
    let mut state = UsersState::default();
    assert!(!state.shows_no_match());
    state.finish_load(Ok(directory()));
    assert!(!state.shows_no_match());
    state.query = "zz".to_owned();
    assert!(state.shows_no_match());
}
