use super::*;

#[test]
fn endpoints_trim_trailing_slash() {
    let api = UserApi::new("https://example.test/");
    assert_eq!(api.base_url(), "https://example.test");
    assert_eq!(api.users_endpoint(), "https://example.test/users");
    assert_eq!(api.user_endpoint("3"), "https://example.test/users/3");
}

#[test]
fn from_config_uses_configured_base() {
    let api = UserApi::from_config(&AppConfig::default());
    assert_eq!(api.users_endpoint(), "https://jsonplaceholder.typicode.com/users");
}

#[test]
fn status_error_maps_404_to_not_found() {
    assert!(matches!(status_error("u", 404), FetchError::NotFound(_)));
}

#[test]
fn status_error_maps_other_statuses_to_network() {
    assert_eq!(status_error("u", 500), FetchError::Network("u returned 500".to_owned()));
    assert!(matches!(status_error("u", 403), FetchError::Network(_)));
}

#[test]
fn user_from_value_treats_empty_object_as_not_found() {
    let err = user_from_value("42", serde_json::json!({})).unwrap_err();
    assert_eq!(err, FetchError::NotFound("42".to_owned()));
}

#[test]
fn user_from_value_treats_null_as_not_found() {
    assert!(matches!(user_from_value("1", serde_json::Value::Null), Err(FetchError::NotFound(_))));
}

#[test]
fn user_from_value_decodes_record() {
    let user = user_from_value("2", serde_json::json!({ "id": 2, "name": "Ervin Howell" })).unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Ervin Howell");
}

#[test]
fn user_from_value_reports_malformed_record_as_network() {
    let err = user_from_value("2", serde_json::json!({ "id": "two" })).unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn unavailable_outside_browser_is_network_error() {
    assert!(matches!(unavailable("https://x/users"), FetchError::Network(_)));
}
