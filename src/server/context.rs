use std::time::Duration;

use crate::config::Config;
use crate::files::FileRoot;

/// Read-only state shared by every connection.
///
/// Built once at startup and handed to each connection task behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub files: FileRoot,
    /// Deadline for receiving the request head, and separately the body.
    pub read_timeout: Duration,
    /// Deadline for writing the response.
    pub write_timeout: Duration,
}

impl AppContext {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            files: FileRoot::new(cfg.files.directory.clone()),
            read_timeout: Duration::from_secs(cfg.server.read_timeout_secs),
            write_timeout: Duration::from_secs(cfg.server.write_timeout_secs),
        }
    }
}
