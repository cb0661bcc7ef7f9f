use super::*;

#[test]
fn default_points_at_placeholder_api() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.theme_storage_key, "userHubTheme");
    assert_eq!(config.message_ttl, Duration::from_secs(3));
}

#[test]
fn with_api_base_overrides_url() {
    let config = AppConfig::with_api_base(Some("http://localhost:3000"));
    assert_eq!(config.api_base_url, "http://localhost:3000");
    assert_eq!(config.theme_storage_key, THEME_STORAGE_KEY);
}

#[test]
fn with_api_base_ignores_blank_value() {
    assert_eq!(AppConfig::with_api_base(Some("   ")), AppConfig::default());
    assert_eq!(AppConfig::with_api_base(None), AppConfig::default());
}
