//! One-shot local HTTP responder for exercising the fetch path without network access.

use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Answers requests whose head contains `needle`.
pub struct Route {
    needle: &'static str,
    status: u16,
    body: String,
}

impl Route {
    pub fn ok(needle: &'static str, body: impl Into<String>) -> Self {
        Self {
            needle,
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(needle: &'static str, status: u16) -> Self {
        Self {
            needle,
            status,
            body: String::new(),
        }
    }
}

pub struct LocalServer {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

impl LocalServer {
    /// Waits for the expected number of connections and returns their request heads.
    pub async fn requests(self) -> Vec<String> {
        self.handle.await.expect("local server task panicked")
    }
}

/// Serves `connections` requests, one at a time, then stops.
pub async fn serve(routes: Vec<Route>, connections: usize) -> LocalServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local listener address");

    let handle = tokio::spawn(async move {
        let mut requests = Vec::with_capacity(connections);
        for _ in 0..connections {
            let (mut socket, _) = listener.accept().await.expect("accept connection");
            let head = read_request_head(&mut socket).await;
            let (status, body) = routes
                .iter()
                .find(|route| head.contains(route.needle))
                .map(|route| (route.status, route.body.as_str()))
                .unwrap_or((404, ""));
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason(status),
                body.len(),
                body
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            socket.shutdown().await.ok();
            requests.push(head);
        }
        requests
    });

    LocalServer {
        url: format!("http://{addr}/httpparam"),
        handle,
    }
}

/// A client that never routes through a proxy from the environment.
pub fn local_client() -> Client {
    Client::builder()
        .no_proxy()
        .build()
        .expect("build reqwest client")
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.expect("read request");
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Error",
    }
}
