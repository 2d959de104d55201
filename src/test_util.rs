/// Test helpers: a stub resolution backend bound to a local port
use crate::config::ServerConfig;
use axum::{
    extract::RawQuery,
    http::{header, StatusCode},
    routing::get,
    Router,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Canonical address accepted by the driver
pub const VALID_ID: &str = "0xabc1230000000000000000000000000000def456";

/// Backend answering every `/resolve` call with a fixed status and body
pub struct StubBackend {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

impl StubBackend {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let body: String = body.into();
        let hits = Arc::new(AtomicUsize::new(0));
        let last_query = Arc::new(Mutex::new(None));

        let handler = {
            let hits = Arc::clone(&hits);
            let last_query = Arc::clone(&last_query);
            move |RawQuery(query): RawQuery| {
                let hits = Arc::clone(&hits);
                let last_query = Arc::clone(&last_query);
                let body = body.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    *last_query.lock().unwrap() = query;
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }
        };

        let app = Router::new().route("/resolve", get(handler));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            hits,
            last_query,
        }
    }

    /// Number of `/resolve` calls received
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Raw query string of the last call
    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }

    /// Driver configuration pointing at this stub
    pub fn config(&self) -> ServerConfig {
        config_for(self.addr)
    }
}

/// Driver configuration pointing at a port nothing listens on
pub async fn unreachable_backend() -> ServerConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    config_for(addr)
}

/// Driver configuration pointing at a backend that answers 200, announces a
/// longer body than it sends, then closes the connection
pub async fn truncated_backend() -> ServerConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\n\
                      Content-Type: application/json\r\n\
                      Content-Length: 100\r\n\
                      \r\n\
                      {\"status\"",
                )
                .await;
            let _ = socket.shutdown().await;
        }
    });
    config_for(addr)
}

fn config_for(addr: SocketAddr) -> ServerConfig {
    let vars = HashMap::from([
        ("DRIVER_RESOLVER_HOST".to_string(), addr.ip().to_string()),
        ("DRIVER_RESOLVER_PORT".to_string(), addr.port().to_string()),
        ("DRIVER_RESOLVER_TIMEOUT_SECS".to_string(), "5".to_string()),
    ]);
    ServerConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}
