use axum::{
    extract::Request,
    middleware,
    routing::get,
    Router,
};
use log::{info, warn};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::handlers::{
    address_handlers::{create_address, get_address, list_addresses, update_address},
    event_handlers::{create_event, delete_event, get_event, list_events, update_event},
    health_handlers::{get_health, get_health_with_path, root},
    organization_handlers::{
        create_organization, delete_organization, get_organization, list_organizations,
        update_organization,
    },
    person_handlers::{create_person, get_person, list_persons, update_person},
};
use crate::state::AppState;

/// Creates a router backed by fresh in-memory stores
pub fn create_router(config: &Config) -> Router {
    info!("Creating router with in-memory stores");
    create_router_with_state(AppState::in_memory(), &config.api_prefix)
}

/// Creates a router with the given stores, nested under `prefix` when non-empty
pub fn create_router_with_state(state: AppState, prefix: &str) -> Router {
    info!("Setting up API routes with prefix: '{}'", prefix);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(get_health))
        .route("/health/:path_echo", get(get_health_with_path))
        .route("/addresses", get(list_addresses).post(create_address))
        .route("/addresses/:id", get(get_address).patch(update_address))
        .route("/persons", get(list_persons).post(create_person))
        .route("/persons/:id", get(get_person).patch(update_person))
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/:id",
            get(get_event).patch(update_event).delete(delete_event),
        )
        .route(
            "/organizations",
            get(list_organizations).post(create_organization),
        )
        .route(
            "/organizations/:id",
            get(get_organization)
                .patch(update_organization)
                .delete(delete_organization),
        )
        .with_state(state);

    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };

    let router = router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    // Add a fallback handler for 404s
    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        (
            axum::http::StatusCode::NOT_FOUND,
            "The requested resource was not found".to_string(),
        )
    })
}
