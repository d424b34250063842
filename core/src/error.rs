//! Error types for the content client.
//!
//! # Design
//! Non-2xx responses are split into the categories page code actually
//! branches on: bad credentials, missing permissions, missing documents and
//! server trouble. Everything else lands in `HttpError` with the raw status
//! and body for debugging.

use thiserror::Error;

/// Errors returned by `ContentClient` and its transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401. The API token is missing, expired or wrong.
    #[error("unauthorized (401): check the content API token (token present: {token_present})")]
    Unauthorized { token_present: bool, body: String },

    /// 403. The token is valid but lacks permission for this resource.
    #[error("forbidden (403): the API token cannot access this resource")]
    Forbidden { body: String },

    /// 404. The requested document or collection does not exist.
    #[error("not found (404): the requested content does not exist")]
    NotFound { body: String },

    /// 5xx from the content store.
    #[error("server error ({status}): the content store is having trouble")]
    ServerError { status: u16, body: String },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body was not the JSON shape we expected.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The request payload could not be encoded.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The GraphQL endpoint answered 200 with an `errors` array.
    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    /// The configured base URL cannot carry an API path.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Map a non-success status to its category.
    pub fn from_status(status: u16, body: String, token_present: bool) -> Self {
        match status {
            401 => ApiError::Unauthorized { token_present, body },
            403 => ApiError::Forbidden { body },
            404 => ApiError::NotFound { body },
            s if s >= 500 => ApiError::ServerError { status: s, body },
            s => ApiError::HttpError { status: s, body },
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::ServerError { status, .. } | ApiError::HttpError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
