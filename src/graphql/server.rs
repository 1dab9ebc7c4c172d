//! HTTP transport: GraphiQL on `GET /`, GraphQL on `POST /`.

use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Json, Router,
    response::{Html, IntoResponse},
    routing::get,
};

use super::TodoSchema;
use crate::error::Result;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "relay-todo",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn router(schema: TodoSchema) -> Router {
    Router::new()
        .route("/", get(graphiql).post_service(GraphQL::new(schema)))
        .route("/health", get(health))
}

pub async fn run_server(schema: TodoSchema, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");
    axum::serve(listener, router(schema)).await?;
    Ok(())
}
