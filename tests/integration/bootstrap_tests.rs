// Integration tests for the bootstrapped application and its login / logout flows

use crate::common::{api_path, test_config};
use book_tracker_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_sign_in_stores_token_for_later_requests() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", api_path("/auth/login").as_str())
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"jwt-9","user":{"id":1,"username":"ana"}}"#)
        .create_async()
        .await;
    let books = server
        .mock("GET", api_path("/books").as_str())
        .match_header("authorization", "Bearer jwt-9")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"books":[],"count":0}"#)
        .create_async()
        .await;

    let store = MemoryTokenStore::new();
    let app = App::with_token_store(test_config(&server), Arc::new(store.clone()));
    assert!(!app.is_signed_in());

    app.sign_in(&Credentials::new("ana", "pw"))
        .await
        .expect("sign in should succeed");
    assert_eq!(store.token(), Some("jwt-9".to_string()));
    assert!(app.is_signed_in());

    app.client().get_books(None).await.expect("books should load");

    login.assert_async().await;
    books.assert_async().await;
}

#[tokio::test]
async fn test_sign_out_clears_token_even_on_server_error() {
    let mut server = Server::new_async().await;
    let logout = server
        .mock("POST", api_path("/auth/logout").as_str())
        .match_header("authorization", "Bearer old")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"session store unavailable"}"#)
        .create_async()
        .await;

    let store = MemoryTokenStore::with_token("old");
    let app = App::with_token_store(test_config(&server), Arc::new(store.clone()));

    let err = app.sign_out().await.expect_err("server error is reported");
    assert_eq!(err.message(), "session store unavailable");
    assert_eq!(store.token(), None);

    logout.assert_async().await;
}

#[tokio::test]
async fn test_bootstrap_with_file_store_persists_token() {
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("storage.json");

    let mut server = Server::new_async().await;
    let register = server
        .mock("POST", api_path("/auth/register").as_str())
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"jwt-file","user":{"id":2,"username":"bob"}}"#)
        .create_async()
        .await;

    let app = App::bootstrap_with(test_config(&server).with_token_file(&token_file));
    app.sign_up(&RegisterRequest::new("bob", "pw"))
        .await
        .expect("sign up should succeed");

    assert_eq!(
        FileTokenStore::new(&token_file).token(),
        Some("jwt-file".to_string())
    );
    assert_eq!(app.config().storage.token_file, token_file);

    register.assert_async().await;
}

#[tokio::test]
async fn test_sign_in_without_token_in_reply_stores_nothing() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", api_path("/auth/login").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"check your inbox"}"#)
        .create_async()
        .await;

    let store = MemoryTokenStore::new();
    let app = App::with_token_store(test_config(&server), Arc::new(store.clone()));
    let session = app
        .sign_in(&Credentials::new("ana", "pw"))
        .await
        .expect("sign in should succeed");

    assert!(session.token.is_none());
    assert_eq!(store.token(), None);
    login.assert_async().await;
}
