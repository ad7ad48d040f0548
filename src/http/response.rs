use bytes::Bytes;

/// HTML content type used by every generated page.
pub const TEXT_HTML: &str = "text/html";

/// Content type for static file bodies, whatever their extension.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Body of the 404 page for unmatched routes.
pub const NOT_FOUND_BODY: &str = "<html><body><h1>404 Not Found</h1></body></html>";

/// Body of the 404 page for missing or unreadable static files.
pub const FILE_NOT_FOUND_BODY: &str = "<html><body><h1>File Not Found</h1></body></html>";

/// HTTP status codes the server emits.
///
/// The server never produces anything but success or not-found: malformed
/// input degrades to a best-effort 200 and missing resources are 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minnow::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// How the body goes out on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Written together with the head in one write.
    Buffered(Bytes),
    /// File contents, written after the head as a separate write.
    File(Bytes),
}

impl Body {
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Buffered(b) | Body::File(b) => b,
        }
    }
}

/// A response produced by a route, consumed once by the writer.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Body,
}

impl Response {
    /// A `text/html` page with the given status.
    pub fn html(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_HTML,
            body: Body::Buffered(Bytes::from(body.into())),
        }
    }

    /// A 200 carrying raw file bytes.
    pub fn file(contents: Bytes) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: OCTET_STREAM,
            body: Body::File(contents),
        }
    }

    /// The fixed 404 for unmatched routes.
    pub fn not_found() -> Self {
        Self::html(StatusCode::NotFound, NOT_FOUND_BODY)
    }

    /// The fixed 404 for static files that cannot be served.
    pub fn file_not_found() -> Self {
        Self::html(StatusCode::NotFound, FILE_NOT_FOUND_BODY)
    }
}
