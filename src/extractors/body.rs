//! Reads a request body as form fields or a JSON object, whichever the content type names.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
};
use serde_json::{Map, Value};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body data in both shapes. At most one is populated for a given request.
/// A JSON body that is malformed or not an object is kept as `invalid` and only reported by
/// `attributes`, so handlers can check the target resource first.
#[derive(Clone, Debug, Default)]
pub struct RequestData {
    pub form: Vec<(String, String)>,
    pub json: Option<Map<String, Value>>,
    pub invalid: Option<String>,
}

impl RequestData {
    /// Attribute pairs in request order. Form fields win when present; otherwise the JSON object.
    pub fn attributes(self) -> Result<Vec<(String, Value)>, AppError> {
        if !self.form.is_empty() {
            return Ok(self
                .form
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect());
        }
        if let Some(message) = self.invalid {
            return Err(AppError::BadRequest(message));
        }
        Ok(self.json.map(|m| m.into_iter().collect()).unwrap_or_default())
    }

    fn parse(content_type: &str, bytes: &[u8]) -> Self {
        let mut data = RequestData::default();
        if bytes.is_empty() {
            return data;
        }
        if content_type.starts_with(FORM_CONTENT_TYPE) {
            data.form = form_urlencoded::parse(bytes).into_owned().collect();
        } else if is_json(content_type) {
            match serde_json::from_slice::<Value>(bytes) {
                Ok(Value::Object(m)) => data.json = Some(m),
                Ok(_) => data.invalid = Some("Request body must be a JSON object.".into()),
                Err(_) => data.invalid = Some("Request body is not valid JSON.".into()),
            }
        }
        data
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[async_trait]
impl<S> FromRequest<S> for RequestData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().to_ascii_lowercase())
            .unwrap_or_default();
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            let status = e.status();
            tracing::debug!(%status, error = %e.body_text(), "request body rejected");
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                "Request body is too large."
            } else {
                "Request body could not be read."
            };
            AppError::Rejected(status, message.into())
        })?;
        Ok(RequestData::parse(&content_type, &bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_fields_keep_request_order() {
        let data = RequestData::parse(FORM_CONTENT_TYPE, b"name=Sweet+Spot&zeta=1&alpha=2");
        let keys: Vec<String> = data.attributes().unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "zeta", "alpha"]);
    }

    #[test]
    fn form_values_are_decoded_strings() {
        let data = RequestData::parse("application/x-www-form-urlencoded; charset=utf-8", b"name=Caf%C3%A9+Nuit");
        assert_eq!(data.attributes().unwrap(), vec![("name".to_string(), json!("Café Nuit"))]);
    }

    #[test]
    fn json_object_is_used_without_form() {
        let data = RequestData::parse("application/json", br#"{"name": "Loaf", "id": 9}"#);
        let attrs = data.attributes().unwrap();
        assert_eq!(attrs[0], ("name".to_string(), json!("Loaf")));
        assert_eq!(attrs[1], ("id".to_string(), json!(9)));
    }

    #[test]
    fn form_takes_precedence_over_json() {
        let data = RequestData {
            form: vec![("name".into(), "From form".into())],
            json: Some(json!({"name": "From json"}).as_object().cloned().unwrap()),
            invalid: None,
        };
        assert_eq!(data.attributes().unwrap(), vec![("name".to_string(), json!("From form"))]);
    }

    #[test]
    fn empty_or_unknown_bodies_yield_nothing() {
        assert!(RequestData::parse("application/json", b"").attributes().unwrap().is_empty());
        assert!(RequestData::parse("application/json", b"{}").attributes().unwrap().is_empty());
        assert!(RequestData::parse("text/plain", b"name=x").attributes().unwrap().is_empty());
        assert!(RequestData::parse("", b"").attributes().unwrap().is_empty());
    }

    #[test]
    fn bad_json_is_reported_only_when_attributes_are_read() {
        let array = RequestData::parse("application/json", b"[1, 2]");
        assert_eq!(array.invalid.as_deref(), Some("Request body must be a JSON object."));
        assert!(matches!(array.attributes(), Err(AppError::BadRequest(_))));

        let broken = RequestData::parse("application/json", b"{not json");
        assert!(matches!(
            broken.attributes(),
            Err(AppError::BadRequest(m)) if m == "Request body is not valid JSON."
        ));
    }
}
