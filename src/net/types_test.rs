use super::*;

// =============================================================
// Credential
// =============================================================

#[test]
fn credential_bearer_prefixes_token() {
    assert_eq!(Credential::new("T").bearer(), "Bearer T");
}

#[test]
fn credential_debug_hides_token() {
    let rendered = format!("{:?}", Credential::new("super-secret"));
    assert!(!rendered.contains("super-secret"));
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_serializes_without_name() {
    let req = LoginRequest { email: "a@x.com".into(), password: "pw".into() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@x.com", "password": "pw" }));
}

#[test]
fn signup_request_serializes_all_fields() {
    let req = SignupRequest { name: "Bo".into(), email: "bo@x.com".into(), password: "pw".into() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Bo", "email": "bo@x.com", "password": "pw" }));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn user_record_accepts_numeric_id() {
    let users: Vec<UserRecord> =
        serde_json::from_str(r#"[{"id":1,"name":"Ann","email":"ann@x.com"}]"#).unwrap();
    assert_eq!(
        users,
        vec![UserRecord { id: UserId::Number(1), name: "Ann".into(), email: "ann@x.com".into() }]
    );
}

#[test]
fn user_record_accepts_string_id() {
    let user: UserRecord =
        serde_json::from_str(r#"{"id":"64f0c2","name":"Bo","email":"bo@x.com"}"#).unwrap();
    assert_eq!(user.id, UserId::Text("64f0c2".into()));
    assert_eq!(user.id.to_string(), "64f0c2");
}

#[test]
fn user_record_tolerates_null_and_missing_text() {
    let user: UserRecord = serde_json::from_str(r#"{"id":2,"name":null,"email":null}"#).unwrap();
    assert_eq!(user, UserRecord { id: UserId::Number(2), name: String::new(), email: String::new() });

    let user: UserRecord = serde_json::from_str(r#"{"id":3}"#).unwrap();
    assert_eq!(user.name, "");
    assert_eq!(user.email, "");
}

#[test]
fn user_id_outside_i64_is_kept_as_text() {
    let users: Vec<UserRecord> = serde_json::from_str(
        r#"[{"id":1.5,"name":"A","email":"a@x"},{"id":18446744073709551615,"name":"B","email":"b@x"}]"#,
    )
    .unwrap();
    assert_eq!(users[0].id, UserId::Text("1.5".into()));
    assert_eq!(users[1].id, UserId::Text("18446744073709551615".into()));
}

#[test]
fn user_id_null_or_missing_is_empty_text() {
    let user: UserRecord = serde_json::from_str(r#"{"id":null,"name":"A","email":"a@x"}"#).unwrap();
    assert_eq!(user.id, UserId::default());
    let user: UserRecord = serde_json::from_str(r#"{"name":"A","email":"a@x"}"#).unwrap();
    assert_eq!(user.id.to_string(), "");
}

#[test]
fn user_id_rejects_structured_values() {
    assert!(serde_json::from_str::<UserRecord>(r#"{"id":[1],"name":"A","email":"a@x"}"#).is_err());
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.message.is_none());
}

#[test]
fn token_response_requires_token() {
    assert!(serde_json::from_str::<TokenResponse>("{}").is_err());
    let ok: TokenResponse = serde_json::from_str(r#"{"token":"T"}"#).unwrap();
    assert_eq!(ok.token, "T");
}
