use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use log::info;
use tokio::net::TcpListener;

// ---------------------------------------------------------------------------
// HTTP surface: a single pre-rendered page
// ---------------------------------------------------------------------------

/// Router serving `page` on `GET /`. Every other path is a 404.
pub fn router(page: String) -> Router {
    Router::new()
        .route("/", get(serve_page))
        .with_state(Bytes::from(page))
}

async fn serve_page(State(page): State<Bytes>) -> Html<Bytes> {
    Html(page)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, page: String) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    serve_on(listener, page).await
}

/// Serve on an already bound listener.
pub async fn serve_on(listener: TcpListener, page: String) -> Result<()> {
    let addr = listener.local_addr().context("reading listener address")?;
    info!("dashboard listening on http://{addr}");
    axum::serve(listener, router(page))
        .await
        .context("HTTP server stopped")
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    use super::*;

    async fn request(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(req.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn serves_page_on_root_only() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve_on(listener, "<p>dashboard</p>".to_string()));

        let root = request(addr, "/").await;
        assert!(root.starts_with("HTTP/1.1 200"));
        assert!(root.to_ascii_lowercase().contains("content-type: text/html"));
        assert!(root.ends_with("<p>dashboard</p>"));

        let other = request(addr, "/api").await;
        assert!(other.starts_with("HTTP/1.1 404"));
    }
}
