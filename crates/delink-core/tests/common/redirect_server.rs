//! Minimal HTTP/1.1 server emitting a scripted redirect chain for
//! integration tests.
//!
//! Each route maps a path to a fixed response (status + optional Location).
//! Lookup ignores the query string, so a redirect target can carry tracking
//! parameters while the terminal route stays addressable. The server runs
//! until the process exits.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Scripted response for one path.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub location: Option<String>,
    /// If false, HEAD gets 405 and the client must fall back to GET.
    pub head_allowed: bool,
}

impl Route {
    pub fn redirect(status: u16, location: impl Into<String>) -> Self {
        Self {
            status,
            location: Some(location.into()),
            head_allowed: true,
        }
    }

    pub fn terminal(status: u16) -> Self {
        Self {
            status,
            location: None,
            head_allowed: true,
        }
    }

    pub fn head_blocked(mut self) -> Self {
        self.head_allowed = false;
        self
    }
}

/// Starts a server in a background thread serving `routes`. Returns the base
/// URL without a trailing slash (e.g. "http://127.0.0.1:12345").
pub fn start(routes: HashMap<String, Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    let mut parts = request.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let path = target.split('?').next().unwrap_or(target);

    let route = match routes.get(path) {
        Some(r) => r,
        None => {
            let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
            return;
        }
    };

    let is_head = method.eq_ignore_ascii_case("HEAD");
    if is_head && !route.head_allowed {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let body = b"ok\n";
    let location = route
        .location
        .as_deref()
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {} {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        location,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    if !is_head {
        let _ = stream.write_all(body);
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        404 => "Not Found",
        405 => "Method Not Allowed",
        410 => "Gone",
        500 => "Internal Server Error",
        _ => "Response",
    }
}
