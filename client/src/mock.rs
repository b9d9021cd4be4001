//! In-process index server for tests.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::Client;

/// Router answering `GET path` with `body` serialized as JSON.
pub fn respond<T: Serialize + Clone + Send + Sync + 'static>(path: &str, body: T) -> Router {
    Router::new().route(path, get(move || async move { Json(body) }))
}

/// Serves `router` on an ephemeral local port and returns a client pointed at it.
pub async fn serve(router: Router) -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Client::new(base_url)
}
