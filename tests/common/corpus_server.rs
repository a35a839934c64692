//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one fixed reply, and counts how many requests
//! it has seen.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

pub struct CorpusServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl CorpusServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
pub struct Reply {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Runs after the request is read and before the reply is written.
    pub before_reply: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Reply {
    pub fn text(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: "text/plain; charset=utf-8",
            body: body.as_bytes().to_vec(),
            before_reply: None,
        }
    }
}

/// Serves `body` with `200 OK` at `http://127.0.0.1:<port>/input.txt`.
pub fn start(body: &str) -> CorpusServer {
    start_with(Reply::text(body))
}

/// Like `start`, but with a custom status line (e.g. "404 Not Found").
pub fn start_with_status(body: &str, status: &'static str) -> CorpusServer {
    start_with(Reply {
        status,
        ..Reply::text(body)
    })
}

/// Like `start`, but runs `hook` on every request before answering.
pub fn start_with_hook(body: &str, hook: impl Fn() + Send + Sync + 'static) -> CorpusServer {
    start_with(Reply {
        before_reply: Some(Arc::new(hook)),
        ..Reply::text(body)
    })
}

pub fn start_with(reply: Reply) -> CorpusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let reply = Arc::new(reply);
    let counter = Arc::clone(&hits);

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            counter.fetch_add(1, Ordering::SeqCst);
            let reply = Arc::clone(&reply);
            thread::spawn(move || handle(stream, &reply));
        }
    });

    CorpusServer {
        url: format!("http://127.0.0.1:{port}/input.txt"),
        hits,
    }
}

/// A URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/input.txt")
}

fn handle(mut stream: TcpStream, reply: &Reply) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 1024];

    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    if let Some(hook) = &reply.before_reply {
        hook();
    }

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reply.content_type,
        reply.body.len()
    );

    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
    let _ = stream.flush();
}
