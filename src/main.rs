//! taskdeck HTTP server entry point.
//!
//! Loads configuration, selects task storage, starts the deadline sweep and
//! serves the task API until Ctrl+C or SIGTERM. Log filtering follows
//! `RUST_LOG` when set.

use std::sync::Arc;

use anyhow::Context;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use taskdeck::{
    api,
    config::AppConfig,
    task::{
        adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
        ports::TaskRepository,
        services::{DeadlineSweepScheduler, TaskService},
    },
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "taskdeck=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let Some(url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; tasks are kept in memory");
        return run(Arc::new(InMemoryTaskRepository::new()), &config).await;
    };

    let pool = Pool::builder()
        .max_size(config.pool_size)
        .build(ConnectionManager::new(url))
        .context("failed to build PostgreSQL connection pool")?;
    let repository = PostgresTaskRepository::new(pool);
    repository
        .apply_schema()
        .await
        .context("failed to apply task schema")?;
    info!(pool_size = config.pool_size, "using PostgreSQL task storage");
    run(Arc::new(repository), &config).await
}

async fn run<R>(repository: Arc<R>, config: &AppConfig) -> anyhow::Result<()>
where
    R: TaskRepository + 'static,
{
    let service = TaskService::new(repository, Arc::new(DefaultClock));
    let sweep = DeadlineSweepScheduler::spawn(service.clone(), config.sweep_interval);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let served = api::serve(listener, api::router(service), shutdown_signal()).await;

    sweep.shutdown().await;
    served.context("task API server failed")?;
    info!("taskdeck stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "could not listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("shutdown requested");
}
