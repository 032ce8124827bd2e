use crate::{CreatedIdentity, NewIdentity};

use serde_json::json;

#[test]
fn test_new_identity_is_pre_verified() {
    let identity = NewIdentity::new("demo1@gymovo.com".to_string(), "secret1".to_string());
    assert!(identity.email_confirm);
}

#[test]
fn test_new_identity_serializes_admin_fields() {
    let identity = NewIdentity::new("demo1@gymovo.com".to_string(), "secret1".to_string());
    assert_eq!(
        serde_json::to_value(&identity).unwrap(),
        json!({
            "email": "demo1@gymovo.com",
            "password": "secret1",
            "email_confirm": true
        })
    );
}

#[test]
fn test_new_identity_debug_hides_password() {
    let identity = NewIdentity::new("demo1@gymovo.com".to_string(), "secret1".to_string());
    let debug = format!("{:?}", identity);
    assert!(debug.contains("demo1@gymovo.com"));
    assert!(!debug.contains("secret1"));
}

#[test]
fn test_created_identity_ignores_extra_fields() {
    let created: CreatedIdentity = serde_json::from_value(json!({
        "id": "6f1c7a52-0000-0000-0000-000000000001",
        "aud": "authenticated",
        "email": "demo1@gymovo.com",
        "email_confirmed_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(created.id, "6f1c7a52-0000-0000-0000-000000000001");
    assert_eq!(created.email.as_deref(), Some("demo1@gymovo.com"));
}
