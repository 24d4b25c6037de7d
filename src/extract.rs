use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const INVALID_ID: &str = "Invalid Exercise ID";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Non-negative exercise id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseId(pub i64);

impl ExerciseId {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok().filter(|id| *id >= 0).map(Self)
    }
}

impl<S> FromRequestParts<S> for ExerciseId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID.to_string()))?;

        Self::parse(&raw).ok_or_else(|| AppError::BadRequest(INVALID_ID.to_string()))
    }
}

/// JSON request body that rejects with `{"error":"Invalid request payload"}`
/// instead of axum's plain-text rejection. The Content-Type header is not
/// checked.
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_PAYLOAD.to_string()))?;

        serde_json::from_slice(&body).map(JsonPayload).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::BadRequest(INVALID_PAYLOAD.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        assert_eq!(ExerciseId::parse("0"), Some(ExerciseId(0)));
        assert_eq!(ExerciseId::parse("42"), Some(ExerciseId(42)));
    }

    #[test]
    fn test_parse_rejects_negative_and_non_numeric() {
        assert_eq!(ExerciseId::parse("-1"), None);
        assert_eq!(ExerciseId::parse("abc"), None);
        assert_eq!(ExerciseId::parse(""), None);
        assert_eq!(ExerciseId::parse("1.5"), None);
    }
}
