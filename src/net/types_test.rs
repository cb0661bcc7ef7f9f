use super::*;

fn leanne() -> User {
    User {
        id: 1,
        name: "Leanne Graham".to_owned(),
        username: "Bret".to_owned(),
        email: "Sincere@april.biz".to_owned(),
        phone: "1-770-736-8031 x56442".to_owned(),
        website: "hildegard.org".to_owned(),
        company: Company {
            name: "Romaguera-Crona".to_owned(),
            catch_phrase: "Multi-layered client-server neural-net".to_owned(),
            bs: "harness real-time e-markets".to_owned(),
        },
    }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn user_deserializes_upstream_shape_and_ignores_extra_fields() {
    let json = serde_json::json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": { "street": "Kulas Light", "geo": { "lat": "-37.3159", "lng": "81.1496" } },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user, leanne());
}

#[test]
fn user_missing_fields_default_to_empty() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 9, "name": "Solo" })).unwrap();
    assert_eq!(user.id, 9);
    assert_eq!(user.email, "");
    assert_eq!(user.company, Company::default());
}

#[test]
fn user_without_id_is_rejected() {
    let result = serde_json::from_value::<User>(serde_json::json!({ "name": "Nobody" }));
    assert!(result.is_err());
}

#[test]
fn company_serializes_catch_phrase_in_camel_case() {
    let value = serde_json::to_value(&leanne().company).unwrap();
    assert_eq!(value["catchPhrase"], "Multi-layered client-server neural-net");
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn initial_uses_first_letter() {
    assert_eq!(leanne().initial(), "L");
    let lower = User { name: "ervin".to_owned(), ..User::default() };
    assert_eq!(lower.initial(), "E");
    assert_eq!(User::default().initial(), "?");
}

#[test]
fn website_href_adds_scheme_when_missing() {
    assert_eq!(leanne().website_href().as_deref(), Some("http://hildegard.org"));
    let https = User { website: "https://example.com".to_owned(), ..User::default() };
    assert_eq!(https.website_href().as_deref(), Some("https://example.com"));
    assert_eq!(User::default().website_href(), None);
}

#[test]
fn company_label_falls_back_when_blank() {
    assert_eq!(leanne().company_label(), "Romaguera-Crona");
    assert_eq!(User::default().company_label(), "No company");
}
