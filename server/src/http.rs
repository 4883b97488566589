use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{self, HeaderName, HeaderValue, Method, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use products_directory::{DirectoryError, EmployeeId, OverlayAction, Page, PageView};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, warn};

use crate::{config::AppConfig, render::render_page};

const STYLES_CSS: &str = include_str!("assets/styles.css");

/// Shared page session. Handlers hold the lock for their whole run, so each
/// interaction completes before the next one starts.
#[derive(Clone)]
pub struct AppState {
    pub page: Arc<Mutex<Page>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(page: Page, config: Arc<AppConfig>) -> Self {
        Self {
            page: Arc::new(Mutex::new(page)),
            config,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, "directory server listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    CorsLayer::new()
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET])
        .allow_origin(allow_origin)
}

pub fn build_router(state: AppState) -> Router {
    let request_id = MakeRequestUuid;
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/", get(index_handler))
        .route("/search", post(search_handler))
        .route("/cards/open", post(open_card_handler))
        .route("/overlay/{action}", post(overlay_handler))
        .route("/api/view", get(view_handler))
        .route("/assets/styles.css", get(styles_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), request_id))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config.cors_allowed_origins)),
        )
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let page = state.page.lock().await;
    Html(render_page(&page.view()))
}

async fn view_handler(State(state): State<AppState>) -> Json<PageView> {
    let page = state.page.lock().await;
    Json(page.view())
}

#[derive(Deserialize)]
struct SearchForm {
    #[serde(rename = "search-input", default)]
    query: String,
}

async fn search_handler(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> HttpResult<Redirect> {
    let mut page = state.page.lock().await;
    page.directory_mut()?.search(&form.query);
    Ok(Redirect::to("/"))
}

#[derive(Deserialize)]
struct OpenCardForm {
    id: String,
}

async fn open_card_handler(
    State(state): State<AppState>,
    Form(form): Form<OpenCardForm>,
) -> HttpResult<Redirect> {
    let mut page = state.page.lock().await;
    page.directory_mut()?.open(&EmployeeId::new(form.id))?;
    Ok(Redirect::to("/"))
}

async fn overlay_handler(
    State(state): State<AppState>,
    Path(action): Path<OverlayAction>,
) -> HttpResult<Redirect> {
    let mut page = state.page.lock().await;
    let transition = page.directory_mut()?.dispatch(action)?;
    debug!(?action, ?transition, "overlay action handled");
    Ok(Redirect::to("/"))
}

async fn styles_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES_CSS)
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let loaded = matches!(*state.page.lock().await, Page::Loaded(_));
    Json(HealthResponse {
        ok: true,
        loaded,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    loaded: bool,
    version: &'static str,
}

type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug)]
struct HttpError {
    status: StatusCode,
    message: String,
}

impl From<DirectoryError> for HttpError {
    fn from(err: DirectoryError) -> Self {
        let status = match &err {
            DirectoryError::UnknownEmployee(_) => StatusCode::NOT_FOUND,
            DirectoryError::EmployeeHidden(_)
            | DirectoryError::OverlayAlreadyOpen(_)
            | DirectoryError::OverlayClosed => StatusCode::CONFLICT,
            DirectoryError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        };
        warn!(%status, error = %err, "directory interaction rejected");
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
    info!("shutdown signal received");
}
