//! Listener lifecycle: bind, serve-until-signal, and background start/stop.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::api::create_router;
use crate::error::{Result, ServerError};

/// All-interfaces bind address.
const BIND_ADDR: [u8; 4] = [0, 0, 0, 0];

/// A bound but not yet serving HTTP server.
///
/// Binding is separated from serving so a bind failure surfaces as a
/// fatal startup error and so tests can bind port 0 and read back the
/// ephemeral port before serving.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    router: Router,
    addr: SocketAddr,
}

impl Server {
    /// Bind the listener on 0.0.0.0 and assemble the router.
    ///
    /// `config_routes` is nested under `/api/config`.
    pub async fn bind(port: u16, config_routes: Router) -> Result<Self> {
        let addr = SocketAddr::from((BIND_ADDR, port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        // Re-read the address so port 0 reports the resolved port.
        let addr = listener.local_addr()?;

        Ok(Self {
            listener,
            router: create_router(config_routes),
            addr,
        })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until SIGINT/SIGTERM, draining in-flight connections.
    pub async fn serve(self) -> Result<()> {
        info!("Server running on port {}", self.addr.port());

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }

    /// Serve on a background task; the returned handle stops it.
    pub fn start(self) -> ServerHandle {
        let (shutdown, rx) = oneshot::channel();
        let addr = self.addr;

        let task = tokio::spawn(async move {
            axum::serve(self.listener, self.router)
                .with_graceful_shutdown(async {
                    rx.await.ok();
                })
                .await
        });

        ServerHandle {
            addr,
            shutdown,
            task,
        }
    }
}

/// Handle to a server running on a background task.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// The address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Trigger graceful shutdown and wait for the serve loop to finish.
    pub async fn stop(self) -> Result<()> {
        // The task may already have exited; a dead receiver is fine.
        let _ = self.shutdown.send(());

        self.task
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??;
        Ok(())
    }
}

/// Resolves when SIGINT (Ctrl+C) or, on Unix, SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
