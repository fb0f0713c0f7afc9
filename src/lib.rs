//! tinyserve - a small single-process HTTP/1.1 server
//!
//! Echo, user-agent reflection and root-scoped file GET/POST over a
//! hand-written HTTP/1.1 implementation.

pub mod config;
pub mod files;
pub mod http;
pub mod router;
pub mod server;
