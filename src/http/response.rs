/// HTTP status codes the server produces.
///
/// This is the whole status registry: the server never emits a code that
/// is not listed here.
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `BadRequest` (400): Malformed request or short body
/// - `NotFound` (404): Unknown route or missing file
/// - `InternalServerError` (500): Server-side I/O failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

const HTTP_VERSION: &str = "HTTP/1.1";

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Looks up a registered status by its number.
    ///
    /// Returns `None` for any code outside the registry.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            201 => Some(StatusCode::Created),
            400 => Some(StatusCode::BadRequest),
            404 => Some(StatusCode::NotFound),
            500 => Some(StatusCode::InternalServerError),
            _ => None,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Formats the status line without its trailing CRLF.
    ///
    /// ```
    /// # use tinyserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Created.status_line(), "HTTP/1.1 201 Created");
    /// ```
    pub fn status_line(&self) -> String {
        format!("{} {} {}", HTTP_VERSION, self.as_u16(), self.reason_phrase())
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep their insertion order, which is also the order they are
/// written in.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as ordered name/value pairs
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use tinyserve::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"abc".to_vec())
///     .build();
/// assert_eq!(response.header("Content-Length"), Some("3"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header, replacing the value of an existing header with the
    /// same (case-insensitive) name in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the final Response.
    ///
    /// When a body was set, `Content-Length` is always rewritten to its exact
    /// byte length. A response built without a body carries no
    /// `Content-Length` at all.
    pub fn build(self) -> Response {
        let ResponseBuilder {
            status,
            headers,
            body,
        } = self;

        match body {
            Some(body) => {
                let sized = ResponseBuilder {
                    status,
                    headers,
                    body: None,
                }
                .header("Content-Length", body.len().to_string());
                Response {
                    status,
                    headers: sized.headers,
                    body,
                }
            }
            None => Response {
                status,
                headers,
                body: Vec::new(),
            },
        }
    }
}

impl Response {
    /// A bodiless response with only a status line.
    pub fn empty(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates a 200 OK `text/plain` response with the given body.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .body(body.into())
            .build()
    }

    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }

    pub fn bad_request() -> Self {
        Self::empty(StatusCode::BadRequest)
    }

    pub fn internal_error() -> Self {
        Self::empty(StatusCode::InternalServerError)
    }

    /// Looks up a response header by case-insensitive name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
