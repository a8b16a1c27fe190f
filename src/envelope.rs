use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// `{success, message?, data?}` wrapper returned by every API route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn done(message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Envelope {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<Envelope<T>>), crate::error::AppError>;

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(Envelope::ok(data))))
}

pub fn created<T>(message: &str) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(Envelope::done(message))))
}

pub fn done<T>(message: &str) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(Envelope::done(message))))
}
