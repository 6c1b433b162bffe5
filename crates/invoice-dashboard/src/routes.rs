//! Router assembly.

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers;
use crate::services::{AuthService, CustomerService, DashboardService, InvoiceService};
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    let db_pool = state.db.clone();
    let cors = cors_layer(&state.config);

    // Health check routes
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::api_health))
        .with_state(state);

    // Overview routes
    let dashboard_routes = Router::new()
        .route("/api/revenue", get(handlers::dashboard::revenue))
        .route("/api/invoices/latest", get(handlers::dashboard::latest_invoices))
        .route("/api/cards", get(handlers::dashboard::cards))
        .with_state(DashboardService::new(db_pool.clone()));

    // Invoice reads and form actions
    let invoice_routes = Router::new()
        .route("/api/invoices", get(handlers::invoices::list))
        .route("/api/invoices/pages", get(handlers::invoices::pages))
        .route("/api/invoices/{id}", get(handlers::invoices::get))
        .route("/dashboard/invoices/create", post(handlers::invoices::create))
        .route("/dashboard/invoices/{id}/edit", post(handlers::invoices::update))
        .route("/dashboard/invoices/{id}/delete", post(handlers::invoices::delete))
        .with_state(InvoiceService::new(db_pool.clone()));

    // Customer routes
    let customer_routes = Router::new()
        .route("/api/customers", get(handlers::customers::list))
        .route("/api/customers/table", get(handlers::customers::table))
        .with_state(CustomerService::new(db_pool.clone()));

    // Sign-in
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .with_state(AuthService::new(db_pool));

    Router::new()
        .merge(health_routes)
        .merge(dashboard_routes)
        .merge(invoice_routes)
        .merge(customer_routes)
        .merge(auth_routes)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = match config.allowed_origin.as_deref().map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Invalid DASHBOARD_ALLOWED_ORIGIN, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
