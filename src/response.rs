//! Response helpers. Bodies are bare mappings or sequences, no envelope.

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub fn ok(data: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(data))
}

pub fn created(data: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok_many(data: Vec<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(Value::Array(data)))
}

pub fn deleted(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "delete_successful": true,
            "message": message,
        })),
    )
}
