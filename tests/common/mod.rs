// tests/common/mod.rs
//
// One-shot HTTP server on localhost for fetch tests.
#![allow(dead_code)]
use std::{
    io::{Read, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

pub const PRICE_PAGE: &str = include_str!("../fixtures/price_page.html");

/// Serve exactly one response, then hang up.
/// Returns the URL and a handle yielding the raw request head.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 { break; }
            head.extend_from_slice(&buf[..n]);
        }

        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();

        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{}/profile/price_dollar_rl", addr), handle)
}

/// A port nothing listens on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
