use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::http::parser::{ParseError, parse_request_head};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router;
use crate::server::AppContext;

/// Largest request head accepted before answering 400.
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    buffer: BytesMut,
    state: ConnectionState,
    ctx: Arc<AppContext>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

enum ReadOutcome {
    Request(Request),
    Malformed(ParseError),
    PeerClosed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, ctx: Arc<AppContext>) -> Self {
        Self {
            stream,
            peer,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            ctx,
        }
    }

    /// Serves exactly one request, then shuts the socket down.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let Ok(outcome) = timeout(self.ctx.read_timeout, self.read_request()).await
                    else {
                        tracing::warn!(peer = %self.peer, "timed out reading request head");
                        break;
                    };

                    match outcome? {
                        ReadOutcome::Request(req) => ConnectionState::Processing(req),
                        ReadOutcome::Malformed(e) => {
                            tracing::warn!(peer = %self.peer, error = %e, "malformed request");
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                        ReadOutcome::PeerClosed => ConnectionState::Closed,
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self.respond(&req).await;

                    tracing::info!(
                        peer = %self.peer,
                        method = ?req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "request handled"
                    );

                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    let written =
                        timeout(self.ctx.write_timeout, writer.write_to_stream(&mut self.stream)).await;
                    match written {
                        Ok(result) => result.context("failed writing response")?,
                        Err(_) => {
                            tracing::warn!(peer = %self.peer, "timed out writing response");
                            break;
                        }
                    }

                    // One request per connection.
                    let _ = self.stream.shutdown().await;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            match parse_request_head(&self.buffer) {
                Ok((request, consumed)) => {
                    // Whatever follows the head is the start of the body.
                    self.buffer.advance(consumed);
                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    if self.buffer.len() > MAX_HEAD_BYTES {
                        return Ok(ReadOutcome::Malformed(ParseError::Incomplete));
                    }
                }

                Err(e) => return Ok(ReadOutcome::Malformed(e)),
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(ReadOutcome::PeerClosed);
                }
                return Ok(ReadOutcome::Malformed(ParseError::Incomplete));
            }
        }
    }

    async fn respond(&mut self, req: &Request) -> Response {
        let Self {
            stream,
            buffer,
            ctx,
            ..
        } = self;

        // Body bytes that arrived with the head are replayed before the socket.
        let mut body = AsyncReadExt::chain(&buffer[..], stream);
        router::dispatch(ctx.as_ref(), req, &mut body).await
    }
}
