use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoint_appends_path_to_base() {
    assert_eq!(endpoint("http://localhost:3001", LOGIN_PATH), "http://localhost:3001/api/login");
    assert_eq!(endpoint("", USERS_PATH), "/api/users");
    assert_eq!(endpoint("https://a.test", SIGNUP_PATH), "https://a.test/api/signup");
}

#[test]
fn http_api_takes_base_from_config() {
    let cfg = ClientConfig::from_values(Some("https://a.test/"), None).unwrap();
    assert_eq!(HttpAuthApi::new(&cfg).base_url(), "https://a.test");
}

// =============================================================
// Message extraction
// =============================================================

#[test]
fn extract_message_reads_message_field() {
    assert_eq!(extract_message(r#"{"message":"Invalid credentials"}"#), Some("Invalid credentials".to_owned()));
}

#[test]
fn extract_message_absent_field() {
    assert_eq!(extract_message(r#"{"error":"nope"}"#), None);
}

#[test]
fn extract_message_empty_string_is_absent() {
    assert_eq!(extract_message(r#"{"message":""}"#), None);
}

#[test]
fn extract_message_tolerates_non_json_and_wrong_types() {
    assert_eq!(extract_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_message(""), None);
    assert_eq!(extract_message(r#"{"message":42}"#), None);
    assert_eq!(extract_message("[]"), None);
}

#[test]
fn parse_token_requires_non_empty_token() {
    assert_eq!(parse_token(r#"{"token":"T"}"#), Some(Credential::new("T")));
    assert_eq!(parse_token(r#"{"token":""}"#), None);
    assert_eq!(parse_token(r#"{"ok":true}"#), None);
}

#[test]
fn authorization_header_carries_bearer_token() {
    assert_eq!(authorization_header(&Credential::new("a.b-c_d")), Some("Bearer a.b-c_d".to_owned()));
    assert_eq!(authorization_header(&Credential::new("caf\u{e9}")), Some("Bearer caf\u{e9}".to_owned()));
}

#[test]
fn authorization_header_rejects_unsendable_tokens() {
    assert_eq!(authorization_header(&Credential::new("tok\nInjected: 1")), None);
    assert_eq!(authorization_header(&Credential::new("tok\r")), None);
    assert_eq!(authorization_header(&Credential::new("tok\0")), None);
    assert_eq!(authorization_header(&Credential::new("tok\u{2603}")), None);
}

// =============================================================
// ApiFailure messages
// =============================================================

#[test]
fn failure_messages_fall_back_to_generic_text() {
    assert_eq!(ApiFailure::Signup { detail: None }.to_string(), SIGNUP_FAILED);
    assert_eq!(ApiFailure::Login { detail: None }.to_string(), LOGIN_FAILED);
    assert_eq!(ApiFailure::FetchUsers.to_string(), FETCH_USERS_FAILED);
}

#[test]
fn failure_messages_prefer_service_detail() {
    let failure = ApiFailure::Login { detail: Some("Invalid credentials".into()) };
    assert_eq!(failure.to_string(), "Invalid credentials");
    let failure = ApiFailure::Signup { detail: Some("Email already registered".into()) };
    assert_eq!(failure.to_string(), "Email already registered");
}

// =============================================================
// HttpAuthApi without a browser
// =============================================================

#[tokio::test]
async fn fetch_users_without_credential_fails_generically() {
    let api = HttpAuthApi::new(&ClientConfig::default());
    assert_eq!(api.fetch_users(None).await, Err(ApiFailure::FetchUsers));
}

#[tokio::test]
async fn fetch_users_with_unsendable_token_fails_generically() {
    let api = HttpAuthApi::new(&ClientConfig::default());
    let credential = Credential::new("line\nbreak");
    assert_eq!(api.fetch_users(Some(&credential)).await, Err(ApiFailure::FetchUsers));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_build_resolves_to_generic_failures() {
    let api = HttpAuthApi::new(&ClientConfig::default());
    let login = LoginRequest { email: "a@x.com".into(), password: "pw".into() };
    let signup = SignupRequest { name: "Bo".into(), email: "bo@x.com".into(), password: "pw".into() };
    assert_eq!(api.login(&login).await, Err(ApiFailure::Login { detail: None }));
    assert_eq!(api.signup(&signup).await, Err(ApiFailure::Signup { detail: None }));
    assert_eq!(api.fetch_users(Some(&Credential::new("T"))).await, Err(ApiFailure::FetchUsers));
}
