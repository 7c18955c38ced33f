//! Query-string extractor that validates what it deserializes.
//!
//! `ValidatedQuery<T>` works like `axum::extract::Query<T>` and then runs
//! `validator::Validate::validate()`. Both a malformed query string and a
//! failed bound are rejected with 422 through [`AppError::Validation`].

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(describe(&errors)))?;

        Ok(ValidatedQuery(value))
    }
}

/// Flattens field errors into `field: message; field: message`, sorted by field.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut field_errors: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();
    field_errors.sort();

    if field_errors.is_empty() {
        "Validation failed".to_string()
    } else {
        field_errors.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Params {
        #[validate(range(min = 1, max = 5))]
        n: u32,
    }

    async fn handler(ValidatedQuery(params): ValidatedQuery<Params>) -> String {
        params.n.to_string()
    }

    async fn get_status(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/t", get(handler));
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn valid_query_passes_through() {
        let (status, body) = get_status("/t?n=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "3");
    }

    #[tokio::test]
    async fn out_of_bounds_is_422() {
        let (status, body) = get_status("/t?n=9").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("n: range"), "{body}");
    }

    #[tokio::test]
    async fn malformed_value_is_422() {
        let (status, _) = get_status("/t?n=abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
