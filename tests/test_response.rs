use tinyserve::http::response::{Response, ResponseBuilder, StatusCode};
use tinyserve::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_status_lines_for_every_registered_code() {
    let expected = [
        (200, "HTTP/1.1 200 OK"),
        (201, "HTTP/1.1 201 Created"),
        (400, "HTTP/1.1 400 Bad Request"),
        (404, "HTTP/1.1 404 Not Found"),
        (500, "HTTP/1.1 500 Internal Server Error"),
    ];

    for (code, line) in expected {
        let status = StatusCode::from_u16(code).unwrap();
        assert_eq!(status.as_u16(), code);
        assert_eq!(status.status_line(), line);
    }
}

#[test]
fn test_unregistered_codes_are_not_in_registry() {
    assert_eq!(StatusCode::from_u16(204), None);
    assert_eq!(StatusCode::from_u16(405), None);
    assert_eq!(StatusCode::from_u16(0), None);
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    assert_eq!(response.header("Content-Length").unwrap(), body.len().to_string());
}

#[test]
fn test_response_builder_content_length_counts_bytes() {
    let response = Response::text("héllo");

    assert_eq!(response.header("Content-Length"), Some("6"));
}

#[test]
fn test_response_builder_overrides_wrong_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("4"));
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_response_builder_preserves_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("Content-Encoding", "gzip")
        .body(b"x".to_vec())
        .build();

    let names: Vec<_> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["Content-Type", "Content-Encoding", "Content-Length"]);
}

#[test]
fn test_response_builder_header_replaces_case_insensitively() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .header("content-type", "text/plain")
        .build();

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
}

#[test]
fn test_response_without_body_has_no_content_length() {
    let response = ResponseBuilder::new(StatusCode::Created).build();

    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), None);
}

#[test]
fn test_response_with_explicit_empty_body_has_zero_length() {
    let response = ResponseBuilder::new(StatusCode::Ok).body(Vec::new()).build();

    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_response_helpers() {
    assert_eq!(Response::not_found().status, StatusCode::NotFound);
    assert_eq!(Response::bad_request().status, StatusCode::BadRequest);
    assert_eq!(
        Response::internal_error().status,
        StatusCode::InternalServerError
    );
    assert!(Response::not_found().body.is_empty());
}

#[test]
fn test_serialize_text_response() {
    let bytes = serialize_response(&Response::text("abc"));

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc".to_vec()
    );
}

#[test]
fn test_serialize_empty_ok_response() {
    let bytes = serialize_response(&Response::empty(StatusCode::Ok));

    assert_eq!(bytes, b"HTTP/1.1 200 OK\r\n\r\n".to_vec());
}
