//! Router assembly and server startup.

use std::future::Future;

use axum::{
    Json, Router,
    routing::{get, patch},
};
use mockable::Clock;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{dto::HealthResponse, handlers};
use crate::task::{ports::TaskRepository, services::TaskService};

/// Shared state handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Service backing the task endpoints.
    pub service: TaskService<R, C>,
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

/// Builds the task API router.
#[must_use]
pub fn router<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/tasks/:id",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .route("/tasks/:id/toggle", patch(handlers::toggle_task::<R, C>))
        .with_state(AppState { service });

    Router::new()
        .route("/health", get(|| async { Json(HealthResponse::ok()) }))
        .merge(tasks)
        .layer(TraceLayer::new_for_http())
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to complete before this returns.
///
/// # Errors
///
/// Returns an I/O error when the listener fails.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "task API listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
