use super::parse_user_record;
use roomstay_shared::Role;

#[test]
fn valid_record_parses() {
    let raw = r#"{
        "id": 7,
        "username": "jane.doe",
        "email": "jane@example.com",
        "firstName": "Jane",
        "lastName": "Doe",
        "role": "ADMIN"
    }"#;
    let user = parse_user_record(raw).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(parse_user_record("").is_none());
    assert!(parse_user_record("not json at all").is_none());
    assert!(parse_user_record("{\"id\": 7").is_none());
}

#[test]
fn missing_required_fields_are_rejected() {
    // 没有 username
    assert!(parse_user_record(r#"{"id": 7}"#).is_none());
    // 没有 id
    assert!(parse_user_record(r#"{"username": "jane"}"#).is_none());
}

#[test]
fn empty_or_zero_identity_is_rejected() {
    assert!(parse_user_record(r#"{"id": 0, "username": "jane"}"#).is_none());
    assert!(parse_user_record(r#"{"id": 7, "username": ""}"#).is_none());
}

#[test]
fn unknown_fields_and_defaults_are_tolerated() {
    // 老版本记录可能缺 role/email，新版本可能多字段
    let raw = r#"{"id": 3, "username": "bob", "legacyFlag": true}"#;
    let user = parse_user_record(raw).unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.email, "");
}
