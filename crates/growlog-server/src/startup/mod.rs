//! Server assembly and process-wide logging.

mod http;
pub mod logging;

pub use http::http_server;
pub use logging::{LoggingConfig, LoggingGuard, init_logging};
