//! Route handlers, one module per resource

pub mod analytics;
pub mod generate;
pub mod leads;
pub mod products;

use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{self, Json, WithStatus};

/// JSON reply with an explicit status code
pub(crate) fn json_with_status<T: Serialize>(value: &T, status: StatusCode) -> WithStatus<Json> {
    reply::with_status(reply::json(value), status)
}

/// `{"error": "<message>"}` reply with the given status code
pub(crate) fn error_reply(status: StatusCode, message: &str) -> WithStatus<Json> {
    json_with_status(&serde_json::json!({ "error": message }), status)
}
