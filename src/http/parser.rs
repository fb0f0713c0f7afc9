use crate::http::headers::HeaderList;
use crate::http::request::{Method, Request};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request line")]
    InvalidRequest,
    #[error("unknown request method")]
    InvalidMethod,
    #[error("header line without a colon")]
    InvalidHeader,
    #[error("request head is not valid UTF-8")]
    InvalidEncoding,
    #[error("request head is incomplete")]
    Incomplete,
}

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Parses the request line and headers at the start of `buf`.
///
/// Returns the request together with the number of bytes the head occupies,
/// terminator included. Anything past that offset is the start of the body
/// and is left for the caller.
pub fn parse_request_head(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = head.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split(' ');

    let method_str = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::InvalidRequest)?;
    let path = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().filter(|s| !s.is_empty()).unwrap_or("HTTP/1.1");

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HeaderList::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.push(key.trim(), value.trim());
    }

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
    };

    Ok((request, headers_end + HEAD_TERMINATOR.len()))
}

/// Offset of the `\r\n\r\n` that ends the head, if it has arrived yet.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEAD_TERMINATOR.len())
        .position(|w| w == HEAD_TERMINATOR)
}
