use crate::{CoreError, FALLBACK_DISPLAY_NAME, User};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn test_user_new() {
    let user = User::new("Alice");

    assert_eq!(user.user_name, "Alice");
    assert!(!user.sync_id.is_nil());
}

#[test]
fn test_user_new_allocates_distinct_ids() {
    let a = User::new("Alice");
    let b = User::new("Alice");

    assert_ne!(a.sync_id, b.sync_id);
}

#[test]
fn test_user_display_name() {
    let user = User::new("Bob");

    assert_eq!(user.display_name(), "Bob");
}

#[test]
fn test_user_display_name_falls_back_when_empty() {
    let user = User::new("");

    assert_eq!(user.display_name(), FALLBACK_DISPLAY_NAME);
}

#[test]
fn given_stored_columns_when_from_parts_then_user_rebuilt() {
    let id = Uuid::new_v4();

    let result = User::from_parts(&id.to_string(), "Carol".to_string());

    assert_that!(result, ok(anything()));
    let user = result.unwrap();
    assert_that!(user.sync_id, eq(id));
    assert_that!(user.user_name.as_str(), eq("Carol"));
}

#[test]
fn given_malformed_id_when_from_parts_then_uuid_error() {
    let result = User::from_parts("not-a-uuid", "Dave".to_string());

    assert!(matches!(result, Err(CoreError::Uuid { .. })));
}

#[test]
fn given_user_when_serialized_then_field_names_are_snake_case() {
    let user = User::new("Eve");

    let json = serde_json::to_value(&user).unwrap();

    assert_that!(json["user_name"].as_str(), some(eq("Eve")));
    assert_that!(
        json["sync_id"].as_str(),
        some(eq(user.sync_id.to_string().as_str()))
    );
}
