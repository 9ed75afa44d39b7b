//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of path -> canned response. Unknown paths get 404.
//! Every request path is recorded so tests can assert probe order.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(content_type: &'static str, body: &[u8]) -> Self {
        Self {
            status: "200 OK",
            content_type: Some(content_type),
            body: body.to_vec(),
        }
    }

    pub fn untyped(body: &[u8]) -> Self {
        Self {
            status: "200 OK",
            content_type: None,
            body: body.to_vec(),
        }
    }

    pub fn redirect(status: &'static str) -> Self {
        Self {
            status,
            content_type: Some("text/html"),
            body: b"<html>moved</html>".to_vec(),
        }
    }
}

pub struct FeedServer {
    /// `127.0.0.1:<port>`, usable directly as a site name.
    pub host: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FeedServer {
    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<(&'static str, Route)>) -> FeedServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    FeedServer {
        host: format!("127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<&'static str, Route>,
    log: &Mutex<Vec<String>>,
) {
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
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(path.clone());

    let not_found = Route {
        status: "404 Not Found",
        content_type: Some("text/html"),
        body: b"<html>not found</html>".to_vec(),
    };
    let route = routes.get(path.as_str()).unwrap_or(&not_found);

    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    if let Some(ct) = route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if route.status.starts_with('3') {
        head.push_str("Location: /rss.xml\r\n");
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}
