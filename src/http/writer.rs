use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};
use crate::stats::StatsRegistry;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Status line and headers, terminated by the blank line.
pub fn serialize_head(resp: &Response) -> BytesMut {
    let head = format!(
        "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        resp.content_type,
        resp.body.len()
    );

    BytesMut::from(head.as_bytes())
}

/// Sends one response and accounts every byte that reached the socket.
pub struct ResponseWriter {
    stats: StatsRegistry,
    written: usize,
}

impl ResponseWriter {
    pub fn new(stats: StatsRegistry) -> Self {
        Self { stats, written: 0 }
    }

    /// Writes `response` and returns the number of bytes sent.
    ///
    /// Bytes written before a failure are still added to the registry.
    pub async fn send<W>(mut self, stream: &mut W, response: &Response) -> anyhow::Result<usize>
    where
        W: AsyncWrite + Unpin,
    {
        let result = self.write_response(stream, response).await;
        self.stats.add_bytes_sent(self.written as u64).await;
        result.map(|()| self.written)
    }

    async fn write_response<W>(&mut self, stream: &mut W, response: &Response) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut head = serialize_head(response);

        match &response.body {
            Body::Buffered(body) => {
                head.put_slice(body);
                self.write_buf(stream, &head).await?;
            }
            Body::File(contents) => {
                self.write_buf(stream, &head).await?;
                self.write_buf(stream, contents).await?;
            }
        }

        stream.flush().await?;
        Ok(())
    }

    async fn write_buf<W>(&mut self, stream: &mut W, buf: &[u8]) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut offset = 0;

        while offset < buf.len() {
            let n = stream.write(&buf[offset..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            offset += n;
            self.written += n;
        }

        Ok(())
    }
}
