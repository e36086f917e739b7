use book_tracker_client::error::AppError;
use book_tracker_client::model::http::{RequestOptions, build_headers, decode, error_message};
use book_tracker_client::model::responses::Book;
use reqwest::{Method, StatusCode};
use serde_json::json;

#[test]
fn test_request_options_builders() {
    assert_eq!(RequestOptions::get().method, Method::GET);
    assert_eq!(RequestOptions::post().method, Method::POST);
    assert_eq!(RequestOptions::put().method, Method::PUT);
    assert_eq!(RequestOptions::delete().method, Method::DELETE);

    let options = RequestOptions::new()
        .with_header("X-Request-Id", "r-1")
        .with_query("status", "read")
        .with_body(json!({"a": 1}));
    assert_eq!(options.headers, vec![("X-Request-Id".to_string(), "r-1".to_string())]);
    assert_eq!(options.query, vec![("status".to_string(), "read".to_string())]);
    assert_eq!(options.body, Some(json!({"a": 1})));
}

#[test]
fn test_headers_without_token_have_no_authorization() {
    let headers = build_headers(&[], None);
    assert!(
        headers
            .iter()
            .all(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
    );
}

#[test]
fn test_headers_with_token() {
    let headers = build_headers(&[("X-Extra".to_string(), "1".to_string())], Some("tok"));
    assert_eq!(
        headers,
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("X-Extra".to_string(), "1".to_string()),
            ("Authorization".to_string(), "Bearer tok".to_string()),
        ]
    );
}

#[test]
fn test_error_message_matches_error_field_exactly() {
    for (status, msg) in [
        (StatusCode::NOT_FOUND, "not found"),
        (StatusCode::UNAUTHORIZED, "User not authenticated"),
        (StatusCode::BAD_REQUEST, "status must be 'to-read', 'reading', or 'read'"),
    ] {
        let body = serde_json::to_vec(&json!({ "error": msg })).unwrap();
        assert_eq!(error_message(status, status.canonical_reason(), &body), msg);
    }
}

#[test]
fn test_error_message_non_json_body() {
    assert_eq!(
        error_message(StatusCode::SERVICE_UNAVAILABLE, Some("Upstream Down"), b"upstream down"),
        "Upstream Down"
    );
}

#[test]
fn test_error_message_json_array_body() {
    assert_eq!(
        error_message(StatusCode::CONFLICT, Some("Conflict"), br#"["error"]"#),
        "HTTP error! status: 409"
    );
}

#[test]
fn test_decode_identity_for_value() {
    let body = json!({"id": 7, "title": "Dune", "nested": {"k": [1, 2, 3]}});
    let decoded: serde_json::Value = decode(body.clone()).unwrap();
    assert_eq!(decoded, body);
}

#[test]
fn test_decode_wrong_shape() {
    let err = decode::<Book>(json!({"title": "no id"})).unwrap_err();
    assert!(matches!(err, AppError::Deserialization(_)));
    assert_eq!(err.status(), None);
}
