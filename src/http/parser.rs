use crate::http::request::Request;

/// Upper bound of a single client read. Anything past this is never seen.
pub const REQUEST_BUFFER_SIZE: usize = 2048;

/// Extracts method and path from the raw bytes of one read.
///
/// Best effort: the bytes are decoded lossily and the first two
/// whitespace-separated tokens are taken. Missing tokens are left empty.
pub fn parse_request_line(buf: &[u8]) -> Request {
    let text = String::from_utf8_lossy(buf);
    let mut parts = text.split_ascii_whitespace();

    let method = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or_default();

    Request::new(method, path)
}
