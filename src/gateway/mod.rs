pub mod auth;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get, post},
};
use tokio::net::TcpListener;

use state::AppState;

/// Build the full gateway router.
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Generic products proxy (no auth, any method)
        .route("/products", any(handlers::proxy::proxy_products_root))
        .route("/products/{*path}", any(handlers::proxy::proxy_products))
        // Orchestrated operations (auth required)
        .route("/order/create", post(handlers::order::create_order))
        .route("/payments/pay", post(handlers::payment::make_payment))
        .route(
            "/payments/status/{payment_id}",
            get(handlers::payment::payment_status),
        );

    Router::new()
        .route("/healthz", get(handlers::health::health))
        .nest("/api/v1", api_routes)
        .with_state(state)
}

/// Start the HTTP gateway server.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📂 API surface: /healthz, /api/v1/products/**, /api/v1/order/create, /api/v1/payments/*");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
