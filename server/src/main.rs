use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use wicket_config::ServerLoadError;
use wicket_memstore::MemoryStore;
use wicket_server::{build_axum_router, App};

#[derive(Debug, Error)]
enum StartError {
    #[error("Could not load server configuration")]
    Config(#[source] ServerLoadError),
    #[error("Could not bind server address")]
    Bind(#[source] std::io::Error),
    #[error("Could not serve the Wicket HTTP service")]
    Serve(#[source] std::io::Error),
}

#[tracing::instrument(skip_all, name = "server.run")]
async fn start_wicket_server() -> Result<(), StartError> {
    let config = wicket_config::Server::from_env().map_err(StartError::Config)?;
    info!(?config, "Starting Wicket HTTP server...");

    let app = App::new(config, Arc::new(MemoryStore::new()));
    let listener = TcpListener::bind((app.config.ip, app.config.port))
        .await
        .map_err(StartError::Bind)?;
    let addr = listener.local_addr().map_err(StartError::Bind)?;

    info!("Wicket HTTP server is listening at http://{addr}");
    axum::serve(listener, build_axum_router(app).into_make_service())
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Received graceful shutdown signal. Shutting down server...");
        })
        .await
        .map_err(StartError::Serve)?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "could not install the SIGTERM handler");
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

#[tokio::main]
async fn main() -> ExitCode {
    // missing .env files are fine; the environment may be set directly
    let _ = dotenvy::dotenv();
    wicket_server::telemetry::init();

    match start_wicket_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");

            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }

            ExitCode::FAILURE
        }
    }
}
