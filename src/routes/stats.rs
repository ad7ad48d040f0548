use crate::http::response::{Response, StatusCode};
use crate::stats::StatsSnapshot;

pub fn render(snapshot: StatsSnapshot) -> Response {
    let body = format!(
        "<html><body><h1>Server Statistics</h1>\
         <p>Total Requests: {}</p>\
         <p>Total Bytes Received: {}</p>\
         <p>Total Bytes Sent: {}</p>\
         </body></html>",
        snapshot.requests_handled, snapshot.bytes_received, snapshot.bytes_sent
    );

    Response::html(StatusCode::Ok, body)
}
