//! HTTP protocol implementation.
//!
//! Deliberately small: one read per connection, one response, then close.
//!
//! - **`connection`**: drives a single accepted client from read to close
//! - **`parser`**: pulls method and path out of the first read
//! - **`request`**: the parsed request line
//! - **`response`**: status, content type and body of an outgoing response
//! - **`writer`**: frames a response onto the socket and accounts sent bytes
//!
//! # Connection lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← one read of at most 2048 bytes
//!        └──────┬──────┘
//!               │ bytes received      (empty read → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← route, build response, write it
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! Requests larger than one read are truncated; headers and bodies are never
//! parsed.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
