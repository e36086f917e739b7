use assert_json_diff::assert_json_eq;
use book_tracker_client::model::responses::{
    AuthSession, Book, BookStatus, BooksResponse, CurrentUser, MessageResponse,
};
use serde_json::json;

#[test]
fn test_books_response_from_server() {
    let body = json!({
        "books": [
            {
                "id": 2,
                "title": "Solaris",
                "author": "Stanislaw Lem",
                "status": "reading",
                "user_id": 1,
                "date_added": "2024-05-01T12:00:00Z",
                "date_started": "2024-05-02T08:00:00Z",
                "created_at": "2024-05-01T12:00:00Z",
                "updated_at": "2024-05-02T08:00:00Z"
            },
            {"id": 1, "title": "Dune", "author": "", "status": "to-read", "user_id": 1}
        ],
        "count": 2
    });
    let response: BooksResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.count, 2);
    assert_eq!(response.books[0].status, BookStatus::Reading);
    assert!(response.books[0].date_finished.is_none());
    assert_eq!(response.books[1].author.as_deref(), Some(""));
}

#[test]
fn test_book_round_trip_preserves_unknown_fields() {
    let body = json!({"id": 7, "title": "Dune", "status": "unread", "shelf": "favourites"});
    let book: Book = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(book.status, BookStatus::Other("unread".to_string()));
    assert_json_eq!(serde_json::to_value(&book).unwrap(), body);
}

#[test]
fn test_book_missing_id_is_rejected() {
    let result = serde_json::from_value::<Book>(json!({"title": "Dune", "status": "read"}));
    assert!(result.is_err());
}

#[test]
fn test_message_response() {
    let response: MessageResponse =
        serde_json::from_value(json!({"message": "Book deleted successfully"})).unwrap();
    assert_eq!(response.message.as_deref(), Some("Book deleted successfully"));
    assert!(response.extra.is_empty());
}

#[test]
fn test_auth_session_with_token_and_user() {
    let session: AuthSession = serde_json::from_value(json!({
        "token": "jwt-abc",
        "user": {"id": 5, "username": "ana", "email": "ana@example.com"}
    }))
    .unwrap();
    assert_eq!(session.token.as_deref(), Some("jwt-abc"));
    let user = session.user.unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(user.email.as_deref(), Some("ana@example.com"));
}

#[test]
fn test_auth_session_without_token() {
    let session: AuthSession =
        serde_json::from_value(json!({"message": "User created"})).unwrap();
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert_eq!(session.message.as_deref(), Some("User created"));
}

#[test]
fn test_current_user_bare() {
    let current: CurrentUser =
        serde_json::from_value(json!({"id": 9, "username": "bob", "role": "reader"})).unwrap();
    let user = current.into_user();
    assert_eq!(user.username, "bob");
    assert_eq!(user.extra.get("role"), Some(&json!("reader")));
}

#[test]
fn test_book_display_is_json() {
    let book: Book =
        serde_json::from_value(json!({"id": 1, "title": "Dune", "status": "read"})).unwrap();
    let rendered = book.to_string();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["title"], "Dune");
}
