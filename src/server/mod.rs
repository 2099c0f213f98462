use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::adapters::{seed, InMemoryProductRepository, LocalStorage};
use crate::config::{ServerConfig, DEFAULT_BODY_LIMIT_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::core::{CatalogService, ConfigProvider};
use crate::utils::error::{Result, ShopError};

pub mod error;
pub mod handlers;

pub use error::ApiError;

#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub limits: HttpLimits,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog,
            limits: HttpLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: HttpLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn from_config(repository: InMemoryProductRepository, config: &ServerConfig) -> Self {
        let catalog =
            CatalogService::new(Arc::new(repository)).with_max_page_size(config.max_page_size());
        Self::new(catalog).with_limits(HttpLimits {
            request_timeout: config.request_timeout(),
            body_limit_bytes: config.body_limit_bytes,
        })
    }
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Handler panicked");
    ApiError::internal().into_response()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// Re-renders the plain 408/413 answers from the tower-http layers as `ApiError` bodies.
async fn render_layer_errors(response: Response) -> Response {
    if is_json(&response) {
        return response;
    }

    match response.status() {
        StatusCode::REQUEST_TIMEOUT => {
            tracing::warn!("Request timed out");
            ApiError::request_timeout().into_response()
        }
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::payload_too_large().into_response(),
        _ => response,
    }
}

/// Wraps `router` with the timeout, body limit, panic and tracing layers.
pub fn with_middleware(router: Router, limits: HttpLimits) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(limits.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            limits.request_timeout,
        ))
        .layer(middleware::map_response(render_layer_errors))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

pub fn build_router(state: AppState) -> Router {
    let limits = state.limits;

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/{id}", get(handlers::get_product))
        .route("/api/categories", get(handlers::list_categories))
        .fallback(handlers::not_found)
        .with_state(state);

    with_middleware(router, limits)
}

/// Loads the seed file named in `config`, or the built-in sample catalog.
pub async fn load_catalog(config: &ServerConfig) -> Result<InMemoryProductRepository> {
    let products = match config.seed_path() {
        Some(path) => seed::load_products(&LocalStorage::default(), path).await?,
        None => {
            tracing::info!("No seed file configured, using built-in sample catalog");
            seed::sample_products()
        }
    };
    InMemoryProductRepository::new(products)
}

/// Serves `app` on an already bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ShopError::ServerError {
            message: format!("HTTP server failed: {}", e),
        })
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let repository = load_catalog(&config).await?;
    tracing::info!("Catalog ready with {} products", repository.len().await);

    let app = build_router(AppState::from_config(repository, &config));

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| ShopError::ServerError {
            message: format!("failed to bind {}: {}", bind_address, e),
        })?;

    tracing::info!("🚀 shop-api listening on http://{}", bind_address);

    run(listener, app, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
