use axum::{extract::Path, Json};
use serde::Deserialize;

use directory_shared::models::{Health, MessageResponse};

use super::QueryParams;
use crate::error::Result;

const FALLBACK_IP: &str = "127.0.0.1";

#[derive(Deserialize, Debug, Default)]
pub struct EchoQuery {
    pub echo: Option<String>,
}

// GET /health
pub async fn get_health(QueryParams(query): QueryParams<EchoQuery>) -> Result<Json<Health>> {
    Ok(Json(Health::ok(resolve_host_ip().await, query.echo, None)))
}

// GET /health/:path_echo
pub async fn get_health_with_path(
    Path(path_echo): Path<String>,
    QueryParams(query): QueryParams<EchoQuery>,
) -> Result<Json<Health>> {
    Ok(Json(Health::ok(
        resolve_host_ip().await,
        query.echo,
        Some(path_echo),
    )))
}

// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Person/Address API. See /health for a liveness probe.".into(),
    })
}

/// Resolves this host's name to its first IPv4 address
async fn resolve_host_ip() -> String {
    let host = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".into());

    let resolved = tokio::net::lookup_host((host.as_str(), 0)).await;
    match resolved {
        Ok(mut addrs) => addrs
            .find(|addr| addr.is_ipv4())
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| FALLBACK_IP.to_string()),
        Err(err) => {
            tracing::debug!("Could not resolve host {}: {}", host, err);
            FALLBACK_IP.to_string()
        }
    }
}
