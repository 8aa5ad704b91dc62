use crate::utils::error::{AppError, Result};
use axum::Router;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

pub struct OrderServer {
    router: Router,
    shutdown_timeout: Duration,
}

impl OrderServer {
    pub fn new(router: Router, shutdown_timeout: Duration) -> Self {
        Self {
            router,
            shutdown_timeout,
        }
    }

    /// Binds `address` and serves until Ctrl-C or SIGTERM.
    pub async fn run(self, address: SocketAddr) -> Result<()> {
        let listener = TcpListener::bind(address).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests get `shutdown_timeout` to finish once the signal
    /// fires; connections still open after that are dropped.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = listener.local_addr()?;
        let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();

        let graceful = async move {
            shutdown.await;
            let _ = signal_tx.send(());
        };

        tracing::info!(address = %address, "server started");

        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(graceful)
            .into_future();
        tokio::pin!(serve);

        tokio::select! {
            result = &mut serve => {
                return result.map_err(|e| AppError::ServerError {
                    message: format!("serve: {}", e),
                });
            }
            _ = signal_rx => {
                tracing::info!("🛑 Shutting down, waiting up to {:?} for open requests", self.shutdown_timeout);
            }
        }

        match tokio::time::timeout(self.shutdown_timeout, serve).await {
            Ok(result) => result.map_err(|e| AppError::ServerError {
                message: format!("serve: {}", e),
            })?,
            Err(_) => tracing::warn!(
                "Graceful shutdown timed out after {:?}, dropping open connections",
                self.shutdown_timeout
            ),
        }

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
