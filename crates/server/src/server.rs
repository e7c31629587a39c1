use axum::{Router, routing::get};

use std::sync::Arc;

use crate::gasto;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn ping() -> &'static str {
    "pong"
}

/// Build the HTTP router over `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/ping", get(ping))
        .route("/gastos", get(gasto::list).post(gasto::create))
        .route("/gastos/count", get(gasto::count))
        .route(
            "/gastos/{id}",
            get(gasto::get).patch(gasto::update).delete(gasto::delete),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}
