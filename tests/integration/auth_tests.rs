// Integration tests for auth endpoints

use crate::common::{anonymous_client, api_path, authenticated_client};
use book_tracker_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_login_posts_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("/auth/login").as_str())
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"username": "ana", "password": "pw"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"jwt-1","user":{"id":3,"username":"ana"}}"#)
        .create_async()
        .await;

    let client = anonymous_client(&server);
    let session = client
        .login(&Credentials::new("ana", "pw"))
        .await
        .expect("login should succeed");

    assert_eq!(session.token.as_deref(), Some("jwt-1"));
    assert_eq!(session.user.map(|u| u.id), Some(3));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("/auth/login").as_str())
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"Invalid credentials"}"#)
        .create_async()
        .await;

    let client = anonymous_client(&server);
    let err = client
        .login(&Credentials::new("ana", "wrong"))
        .await
        .expect_err("login should fail");

    assert_eq!(err.message(), "Invalid credentials");
    assert_eq!(err.status(), Some(401));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_register_posts_user_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("/auth/register").as_str())
        .match_body(Matcher::Json(json!({
            "username": "bob",
            "password": "pw",
            "email": "bob@example.com"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"jwt-2","user":{"id":4,"username":"bob","email":"bob@example.com"}}"#)
        .create_async()
        .await;

    let client = anonymous_client(&server);
    let session = client
        .register(&RegisterRequest::new("bob", "pw").with_email("bob@example.com"))
        .await
        .expect("register should succeed");

    assert_eq!(session.token.as_deref(), Some("jwt-2"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_posts_without_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("/auth/logout").as_str())
        .match_header("authorization", "Bearer jwt-1")
        .match_body("")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Logged out successfully"}"#)
        .create_async()
        .await;

    let client = authenticated_client(&server, "jwt-1");
    let reply = client.logout().await.expect("logout should succeed");

    assert_eq!(reply.message.as_deref(), Some("Logged out successfully"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_current_user_wrapped() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", api_path("/auth/me").as_str())
        .match_header("authorization", "Bearer jwt-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user":{"id":3,"username":"ana","created_at":"2024-01-01T00:00:00Z"}}"#)
        .create_async()
        .await;

    let client = authenticated_client(&server, "jwt-1");
    let user = client.get_current_user().await.expect("me should succeed");

    assert_eq!(user.id, 3);
    assert_eq!(user.username, "ana");
    assert!(user.created_at.is_some());
    mock.assert_async().await;
}
