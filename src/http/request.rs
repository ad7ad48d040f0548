/// The request line of a client request.
///
/// Only the first two tokens of the first read are kept. Either field may be
/// empty when the client sent fewer tokens; that is not an error, the router
/// simply falls through to not-found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The method token as sent (e.g. "GET"). Never interpreted.
    pub method: String,
    /// The request target, query string included (e.g. "/calc?a=1&b=2")
    pub path: String,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}
