//! Request dispatch.
//!
//! [`table::ROUTES`] decides which handler runs; [`handlers`] builds the
//! response. Requests that match no route get a 404.

pub mod handlers;
pub mod table;

use tokio::io::AsyncRead;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::AppContext;
use table::Handler;

/// Produces the response for `request`.
///
/// `body` yields the bytes following the request head. Only the file write
/// handler reads from it.
pub async fn dispatch<R>(ctx: &AppContext, request: &Request, body: &mut R) -> Response
where
    R: AsyncRead + Unpin,
{
    let Some((handler, param)) = table::resolve(&request.method, &request.path) else {
        tracing::debug!(method = ?request.method, path = %request.path, "no route matched");
        return Response::not_found();
    };

    tracing::debug!(method = ?request.method, path = %request.path, ?handler, "dispatching");

    match handler {
        Handler::Root => handlers::root(),
        Handler::Echo => handlers::echo(request, param),
        Handler::UserAgent => handlers::user_agent(request),
        Handler::ReadFile => handlers::read_file(ctx, param).await,
        Handler::WriteFile => handlers::write_file(ctx, request, param, body).await,
    }
}
