use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::Router;
use crate::stats::StatsRegistry;

const LISTEN_BACKLOG: u32 = 1024;

/// A bound listening socket plus the state shared by its connections.
pub struct Listener {
    inner: TcpListener,
    router: Router,
    permits: Arc<Semaphore>,
}

impl Listener {
    /// Binds `cfg.server.listen_addr()` with `SO_REUSEADDR` set.
    pub async fn bind(cfg: &Config, stats: StatsRegistry) -> anyhow::Result<Self> {
        cfg.validate()?;

        let addr: SocketAddr = tokio::net::lookup_host(cfg.server.listen_addr())
            .await
            .with_context(|| format!("resolving {}", cfg.server.listen_addr()))?
            .next()
            .with_context(|| format!("no address for {}", cfg.server.listen_addr()))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .context("socket creation failed")?;

        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("binding {} failed", addr))?;
        let inner = socket.listen(LISTEN_BACKLOG).context("listening failed")?;

        Ok(Self {
            inner,
            router: Router::from_config(cfg, stats),
            permits: Arc::new(Semaphore::new(cfg.server.max_connections)),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    pub fn stats(&self) -> &StatsRegistry {
        self.router.stats()
    }

    /// Accepts forever, one detached task per connection.
    ///
    /// Accept failures and connections over the ceiling are logged and the
    /// loop carries on.
    pub async fn serve(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.inner.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(error = %e, "Failed to accept connection");
                    continue;
                }
            };

            let permit = match self.permits.clone().try_acquire_owned() {
                Ok(permit) => permit,
                Err(_) => {
                    warn!(%peer, "Connection limit reached, closing connection");
                    drop(socket);
                    continue;
                }
            };

            let router = self.router.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, router);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
                drop(permit);
            });
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = Listener::bind(cfg, StatsRegistry::new()).await?;
    info!("Listening on {}", listener.local_addr()?);

    listener.serve().await
}
