use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::{REQUEST_BUFFER_SIZE, parse_request_line};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::routes::Router;

/// One accepted client, owned end to end by a single task.
pub struct Connection<S> {
    stream: S,
    router: Router,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Responding(Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Router) -> Self {
        Self {
            stream,
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Reads once, answers once, then closes. There is no keep-alive.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut result = Ok(());

        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    if let Some(req) = self.read_request().await {
                        self.state = ConnectionState::Responding(req);
                    }
                }

                ConnectionState::Responding(req) => {
                    result = self.respond(&req).await;
                }

                ConnectionState::Closed => break,
            }
        }

        let _ = self.stream.shutdown().await;
        result
    }

    /// Performs the single read of this connection.
    ///
    /// Returns `None` for an empty or failed read; nothing is answered then.
    /// At most [`REQUEST_BUFFER_SIZE`] bytes are ever looked at.
    pub async fn read_request(&mut self) -> Option<Request> {
        let mut buf = [0u8; REQUEST_BUFFER_SIZE];

        let n = match self.stream.read(&mut buf).await {
            Ok(0) => {
                tracing::debug!("Client sent no data");
                return None;
            }
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(error = %e, "Read failed");
                return None;
            }
        };

        self.router.stats().record_request(n as u64).await;
        Some(parse_request_line(&buf[..n]))
    }

    async fn respond(&mut self, req: &Request) -> anyhow::Result<()> {
        let response = self.router.respond(req).await;
        let writer = ResponseWriter::new(self.router.stats().clone());
        let bytes = writer.send(&mut self.stream, &response).await?;

        tracing::info!(
            method = %req.method,
            path = %req.path,
            status = response.status.as_u16(),
            bytes,
            "Request served"
        );

        Ok(())
    }
}
