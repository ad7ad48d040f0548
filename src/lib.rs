//! Minnow - a minimal concurrent HTTP/1.x server
//!
//! Serves static files, a statistics page and a tiny calculator, one task per
//! connection.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
pub mod stats;
