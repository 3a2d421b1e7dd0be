//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body with a configurable status line and optional
//! Content-Disposition header. Runs in a background thread until the test
//! process exits.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    /// Status line without the version, e.g. "200 OK" or "404 Not Found".
    pub status: &'static str,
    /// Optional Content-Disposition header value.
    pub content_disposition: Option<&'static str>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_disposition: None,
        }
    }
}

/// Starts a server serving `body` with a 200 status. Returns the base URL
/// with a trailing slash (e.g. "http://127.0.0.1:12345/").
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ServerOptions::default())
}

/// Like `start` but with a custom status line / headers.
pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, body: &[u8], opts: ServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Drain the request line and headers; the content never matters here.
    let mut buf = [0u8; 8192];
    if matches!(stream.read(&mut buf), Ok(0) | Err(_)) {
        return;
    }

    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n",
        opts.status,
        body.len()
    );
    if let Some(cd) = opts.content_disposition {
        response.push_str(&format!("Content-Disposition: {}\r\n", cd));
    }
    response.push_str("Connection: close\r\n\r\n");

    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
