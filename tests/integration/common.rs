// Common utilities for integration tests

use book_tracker_client::prelude::*;
use mockito::ServerGuard;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Path prefix every mocked endpoint lives under
pub const API_PREFIX: &str = "/api/v1";

/// Builds the mocked path for an endpoint
pub fn api_path(endpoint: &str) -> String {
    format!("{API_PREFIX}{endpoint}")
}

/// Configuration pointing at the mock server
pub fn test_config(server: &ServerGuard) -> Config {
    setup_logger();
    Config::with_base_url(format!("{}{}", server.url(), API_PREFIX))
}

/// Client without a token
pub fn anonymous_client(server: &ServerGuard) -> ApiClient {
    ApiClient::new(test_config(server))
}

/// Client always sending `token`
pub fn authenticated_client(server: &ServerGuard, token: &str) -> ApiClient {
    ApiClient::with_token_provider(test_config(server), Arc::new(StaticToken::new(token)))
}

/// Serves one connection with a fixed status line and plain-text body, then closes
///
/// mockito always sends the canonical reason phrase, so custom status lines need a raw
/// socket. Returns the API base URL of the listener.
pub fn raw_status_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let response = format!(
            "{status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    format!("http://{addr}{API_PREFIX}")
}
