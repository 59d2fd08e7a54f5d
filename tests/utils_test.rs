use chrono::Utc;
use driveshelf::config::{DEFAULT_PORT, DRIVE_SCOPE, parse_port};
use driveshelf::types::{
    ClientSecretDocument, CredentialRecord, DriveFile, Token, VideoMediaMetadata,
};
use driveshelf::utils::*;
use reqwest::Url;
use std::collections::HashMap;

// Helper function to create a test file
fn create_test_file(id: &str, mime_type: Option<&str>) -> DriveFile {
    DriveFile {
        id: id.to_string(),
        name: format!("{}.bin", id),
        mime_type: mime_type.map(str::to_string),
        web_view_link: Some(format!("https://drive.google.com/file/d/{}/view", id)),
        video_media_metadata: None,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_state());
}

#[test]
fn test_generate_code_challenge() {
    // RFC 7636 appendix B
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_build_auth_url() {
    let url = build_auth_url(
        "https://accounts.google.com/o/oauth2/v2/auth",
        "client-123",
        "http://127.0.0.1:3456/oauth2callback",
        "challenge-xyz",
        "state-789",
        DRIVE_SCOPE,
    )
    .unwrap();

    let parsed = Url::parse(&url).unwrap();
    assert_eq!(parsed.host_str(), Some("accounts.google.com"));

    let params: HashMap<String, String> = parsed.query_pairs().into_owned().collect();
    assert_eq!(params["client_id"], "client-123");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["redirect_uri"], "http://127.0.0.1:3456/oauth2callback");
    assert_eq!(params["code_challenge"], "challenge-xyz");
    assert_eq!(params["code_challenge_method"], "S256");
    assert_eq!(params["state"], "state-789");
    assert_eq!(params["scope"], DRIVE_SCOPE);
    assert_eq!(params["access_type"], "offline");
    assert_eq!(params["prompt"], "consent");
}

#[test]
fn test_build_auth_url_rejects_invalid_base() {
    assert!(build_auth_url("not a url", "c", "r", "x", "s", DRIVE_SCOPE).is_err());
}

#[test]
fn test_media_query() {
    assert_eq!(
        media_query("abc123"),
        "'abc123' in parents and (mimeType contains 'image/' or mimeType contains 'video/')"
    );
}

#[test]
fn test_is_media_mime() {
    assert!(is_media_mime("image/jpeg"));
    assert!(is_media_mime("video/mp4"));
    assert!(!is_media_mime("application/pdf"));
    assert!(!is_media_mime("audio/mpeg"));
    // Prefix, not substring
    assert!(!is_media_mime("application/x-image/foo"));
}

#[test]
fn test_retain_media() {
    let mut files = vec![
        create_test_file("a", Some("image/png")),
        create_test_file("b", Some("text/plain")),
        create_test_file("c", None),
        create_test_file("d", Some("video/quicktime")),
    ];

    retain_media(&mut files);

    let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
}

#[test]
fn test_file_table_rows() {
    let mut video = create_test_file("v", Some("video/mp4"));
    video.video_media_metadata = Some(VideoMediaMetadata {
        width: Some(1280),
        height: Some(720),
        duration_millis: Some("1000".to_string()),
    });
    let mut no_link = create_test_file("i", Some("image/gif"));
    no_link.web_view_link = None;

    let rows = file_table_rows(&[video, no_link]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].video, "1280x720");
    assert_eq!(rows[0].link, "https://drive.google.com/file/d/v/view");
    assert_eq!(rows[1].video, "");
    assert_eq!(rows[1].link, "");
}

#[test]
fn test_parse_port() {
    assert_eq!(parse_port(Some("3001".to_string())), 3001);
    assert_eq!(parse_port(Some(" 3000 ".to_string())), 3000);
    assert_eq!(parse_port(Some("not-a-port".to_string())), DEFAULT_PORT);
    assert_eq!(parse_port(Some("70000".to_string())), DEFAULT_PORT);
    assert_eq!(parse_port(None), 8000);
}

#[test]
fn test_client_secret_document_prefers_installed() {
    let doc: ClientSecretDocument = serde_json::from_str(
        r#"{
            "installed": {"client_id": "installed-id", "client_secret": "installed-secret"},
            "web": {"client_id": "web-id", "client_secret": "web-secret"}
        }"#,
    )
    .unwrap();

    let client = doc.into_client().unwrap();
    assert_eq!(client.client_id, "installed-id");
    assert_eq!(client.client_secret, "installed-secret");
}

#[test]
fn test_client_secret_document_without_entries() {
    let doc: ClientSecretDocument = serde_json::from_str("{}").unwrap();
    assert!(doc.into_client().is_none());
}

#[test]
fn test_credential_record_ignores_unknown_fields() {
    let record: CredentialRecord = serde_json::from_str(
        r#"{
            "type": "authorized_user",
            "client_id": "id",
            "client_secret": "secret",
            "refresh_token": "refresh",
            "universe_domain": "googleapis.com"
        }"#,
    )
    .unwrap();

    assert_eq!(record.kind, "authorized_user");
    assert_eq!(record.refresh_token, "refresh");
}

#[test]
fn test_token_expiry_buffer() {
    let now = Utc::now().timestamp() as u64;
    let token = |obtained_at: u64, expires_in: u64| Token {
        access_token: "a".to_string(),
        refresh_token: None,
        expires_in,
        obtained_at,
    };

    assert!(!token(now, 3600).is_expired());
    // Inside the four minute buffer
    assert!(token(now, 200).is_expired());
    assert!(token(now - 7200, 3600).is_expired());
}
