//! Per-route response construction.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::time::timeout;

use crate::files::FileError;
use crate::http::encoding;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::server::AppContext;

pub fn root() -> Response {
    Response::empty(StatusCode::Ok)
}

/// Echoes `message` back, gzip-compressed when the client accepts it.
pub fn echo(request: &Request, message: &str) -> Response {
    let builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Type", "text/plain");

    if !request.accepts_gzip() {
        return builder.body(message.as_bytes().to_vec()).build();
    }

    match encoding::gzip(message.as_bytes()) {
        Ok(compressed) => builder
            .header("Content-Encoding", encoding::GZIP)
            .body(compressed)
            .build(),
        Err(e) => {
            tracing::error!(error = %e, "gzip encoding failed");
            Response::internal_error()
        }
    }
}

/// Reflects the `User-Agent` header. A missing header echoes an empty body.
pub fn user_agent(request: &Request) -> Response {
    Response::text(request.user_agent().unwrap_or_default())
}

pub async fn read_file(ctx: &AppContext, name: &str) -> Response {
    match ctx.files.read(name).await {
        Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(contents)
            .build(),
        Err(e) => {
            tracing::debug!(file = name, error = %e, "file read failed");
            Response::not_found()
        }
    }
}

/// Stores exactly `Content-Length` bytes of body at `name`, replacing any
/// existing file.
///
/// The file is created before the body is read, so a short body leaves an
/// empty file behind.
pub async fn write_file<R>(ctx: &AppContext, request: &Request, name: &str, body: &mut R) -> Response
where
    R: AsyncRead + Unpin,
{
    let expected = request.content_length();

    let mut file = match ctx.files.create(name).await {
        Ok(file) => file,
        Err(e) => {
            log_create_failure(name, &e);
            return Response::internal_error();
        }
    };

    let mut contents = Vec::new();
    let read = timeout(
        ctx.read_timeout,
        (&mut *body).take(expected as u64).read_to_end(&mut contents),
    )
    .await;

    match read {
        Ok(Ok(n)) if n == expected => {}
        Ok(Ok(n)) => {
            tracing::warn!(file = name, expected, received = n, "request body ended early");
            return Response::bad_request();
        }
        Ok(Err(e)) => {
            tracing::warn!(file = name, error = %e, "failed reading request body");
            return Response::bad_request();
        }
        Err(_) => {
            tracing::warn!(file = name, expected, "timed out reading request body");
            return Response::bad_request();
        }
    }

    if let Err(e) = write_all_and_sync(&mut file, &contents).await {
        tracing::error!(file = name, error = %e, "failed writing file");
        return Response::internal_error();
    }

    tracing::debug!(file = name, bytes = contents.len(), "file stored");
    Response::empty(StatusCode::Created)
}

async fn write_all_and_sync(file: &mut tokio::fs::File, contents: &[u8]) -> std::io::Result<()> {
    file.write_all(contents).await?;
    file.flush().await?;
    file.sync_all().await
}

fn log_create_failure(name: &str, e: &FileError) {
    match e {
        FileError::OutsideRoot(_) => {
            tracing::warn!(file = name, error = %e, "refusing to create file")
        }
        _ => tracing::error!(file = name, error = %e, "failed creating file"),
    }
}
