use tinyserve::http::headers::HeaderList;
use tinyserve::http::request::{Method, Request, RequestBuilder};

fn get_with(headers: &[(&str, &str)]) -> Request {
    Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers: headers.iter().copied().collect::<HeaderList>(),
    }
}

#[test]
fn test_request_header_retrieval() {
    let req = get_with(&[("Host", "example.com"), ("Content-Type", "application/json")]);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let req = get_with(&[("Content-Length", "42")]);

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing() {
    assert_eq!(get_with(&[]).content_length(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    assert_eq!(get_with(&[("Content-Length", "not-a-number")]).content_length(), 0);
    assert_eq!(get_with(&[("Content-Length", "-5")]).content_length(), 0);
}

#[test]
fn test_request_content_length_last_parsable_wins() {
    let req = get_with(&[("Content-Length", "3"), ("content-length", "7")]);
    assert_eq!(req.content_length(), 7);

    let req = get_with(&[("Content-Length", "3"), ("Content-Length", "oops")]);
    assert_eq!(req.content_length(), 3);
}

#[test]
fn test_request_accepts_gzip() {
    assert!(get_with(&[("Accept-Encoding", "gzip")]).accepts_gzip());
    assert!(get_with(&[("accept-encoding", "deflate, gzip")]).accepts_gzip());
    assert!(!get_with(&[("Accept-Encoding", "deflate")]).accepts_gzip());
    assert!(!get_with(&[]).accepts_gzip());
}

#[test]
fn test_request_only_first_accept_encoding_counts() {
    let req = get_with(&[("Accept-Encoding", "br"), ("Accept-Encoding", "gzip")]);

    assert!(!req.accepts_gzip());
}

#[test]
fn test_request_user_agent() {
    assert_eq!(
        get_with(&[("User-Agent", "test-client/1.0")]).user_agent(),
        Some("test-client/1.0")
    );
    assert_eq!(get_with(&[]).user_agent(), None);
}

#[test]
fn test_request_builder() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/files/a")
        .header("Content-Length", "3")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.content_length(), 3);
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}
