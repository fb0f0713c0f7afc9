//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 server: one request per connection, no
//! chunked bodies, no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: Drives a single connection through read, dispatch and write
//! - **`parser`**: Parses the request line and headers from a byte buffer
//! - **`headers`**: Ordered header list with case-insensitive lookup
//! - **`request`**: HTTP request head representation
//! - **`response`**: Status registry and response builder
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`encoding`**: `Accept-Encoding` check and gzip compression
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request head (read deadline)
//!        └──────┬──────┘
//!               │ Head parsed          malformed ──┐
//!               ▼                                  │
//!        ┌──────────────────┐                      │
//!        │   Processing     │ ← Route, read body   │
//!        └──────┬───────────┘                      │
//!               │ Response ready                   │
//!               ▼                                  │
//!        ┌──────────────────┐                      │
//!        │    Writing       │ ← 400 ───────────────┘
//!        └──────┬───────────┘   (write deadline)
//!               │ Response sent
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod encoding;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
