//! HTTP server.
//!
//! Serves every page of the site from an immutable [`Catalog`]. The only
//! non-GET route is `POST /join`, which runs a [`JoinForm`] submission bound
//! to the server's shutdown token.

use std::fmt;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::{Config, SiteConfig};
use crate::content::Catalog;
use crate::error::{Error, Result};
use crate::filter::ProjectQuery;
use crate::join::{JoinApplication, JoinForm, SimulatedSubmitter, SubmitOutcome, Submitter};
use crate::render::Renderer;

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    site: Arc<SiteConfig>,
    submitter: Arc<dyn Submitter>,
    shutdown: CancellationToken,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, site: SiteConfig, submitter: Arc<dyn Submitter>) -> Self {
        Self {
            catalog,
            site: Arc::new(site),
            submitter,
            shutdown: CancellationToken::new(),
        }
    }

    /// State for `config`, with the simulated submitter.
    #[must_use]
    pub fn from_config(config: &Config, catalog: Catalog) -> Self {
        Self::new(
            Arc::new(catalog),
            config.site.clone(),
            Arc::new(SimulatedSubmitter::new(config.submit_delay())),
        )
    }

    /// Token that stops the server and cancels pending submissions.
    #[must_use]
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.site, &self.catalog)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("site", &self.site.name)
            .field("groups", &self.catalog.groups().len())
            .field("shutdown", &self.shutdown.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// HTTP status for an error that reaches a handler boundary.
#[must_use]
pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::InvalidApplication { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Error::SubmissionInProgress => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            warn!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}

/// Build the router for `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/groups", get(groups))
        .route("/groups/{id}", get(group))
        .route("/projects", get(projects))
        .route("/members", get(members))
        .route("/resources", get(resources))
        .route("/join", get(join_page).post(join_submit))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already bound listener until the state's shutdown token fires.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn run(listener: TcpListener, state: AppState) -> Result<()> {
    let shutdown = state.shutdown_token();
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;
    Ok(())
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns [`Error::Bind`] if the address is unavailable, or any server error.
pub async fn serve(config: &Config, catalog: Catalog) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| Error::Bind {
            address: address.clone(),
            source,
        })?;
    info!(address = %listener.local_addr()?, "Server listening");

    let state = AppState::from_config(config, catalog);
    let shutdown = state.shutdown_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.cancel();
    });

    run(listener, state).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[derive(Debug, Default, Deserialize)]
struct ProjectParams {
    group: Option<String>,
    search: Option<String>,
}

async fn home(State(state): State<AppState>) -> Html<String> {
    Html(state.renderer().home())
}

async fn groups(State(state): State<AppState>) -> Html<String> {
    Html(state.renderer().groups())
}

async fn group(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let renderer = state.renderer();
    match renderer.group(&id) {
        Ok(page) => Html(page).into_response(),
        Err(e) if e.is_not_found() => {
            debug!(group = %id, "Unknown group");
            (StatusCode::NOT_FOUND, Html(renderer.not_found())).into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectParams>,
) -> Html<String> {
    let query = ProjectQuery::from_params(params.group.as_deref(), params.search.as_deref());
    Html(state.renderer().projects(&query))
}

async fn members(State(state): State<AppState>) -> Html<String> {
    Html(state.renderer().members())
}

async fn resources(State(state): State<AppState>) -> Html<String> {
    Html(state.renderer().resources())
}

async fn join_page(State(state): State<AppState>) -> Html<String> {
    Html(state.renderer().join(&JoinForm::default(), None))
}

async fn join_submit(
    State(state): State<AppState>,
    Form(application): Form<JoinApplication>,
) -> Response {
    let mut form = JoinForm::new(application);
    let cancel = state.shutdown.child_token();
    let result = form
        .submit(&state.catalog, state.submitter.as_ref(), &cancel)
        .await;

    let renderer = state.renderer();
    match result {
        Ok(SubmitOutcome::Accepted) => Html(renderer.join(&form, None)).into_response(),
        Ok(SubmitOutcome::Failed) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(renderer.join(&form, None)),
        )
            .into_response(),
        Ok(SubmitOutcome::Cancelled) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Html(renderer.join(&form, None)),
        )
            .into_response(),
        Err(e) if e.is_invalid_application() => {
            debug!(error = %e, "Join application rejected");
            (status_for(&e), Html(renderer.join(&form, Some(&e)))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found(State(state): State<AppState>) -> Response {
    (StatusCode::NOT_FOUND, Html(state.renderer().not_found())).into_response()
}
