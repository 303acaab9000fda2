//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers GET `/icons/<name>` with the body registered for `<name>` and 404
//! for everything else. Every request path is recorded in arrival order.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct IconServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl IconServer {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts the server on an ephemeral port. `base_url` is
/// `http://127.0.0.1:<port>/icons/`. The server runs until the process exits.
pub fn start(icons: Vec<(&str, Vec<u8>)>) -> IconServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();

    let icons: Arc<HashMap<String, Vec<u8>>> = Arc::new(
        icons
            .into_iter()
            .map(|(name, body)| (format!("/icons/{name}"), body))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));

    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &icons, &recorded);
        }
    });

    IconServer {
        base_url: format!("http://127.0.0.1:{port}/icons/"),
        requests,
    }
}

fn handle(mut stream: TcpStream, icons: &HashMap<String, Vec<u8>>, requests: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    requests.lock().unwrap().push(path.clone());

    let (status, body): (&str, &[u8]) = match icons.get(&path) {
        Some(body) => ("200 OK", body.as_slice()),
        None => ("404 Not Found", &b"not found"[..]),
    };

    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}
