//! Session key extraction from request headers

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::Error;
use crate::types::SessionKey;

/// Header carrying the client's session key
pub const SESSION_HEADER: &str = "x-session-id";

/// Extractor yielding the request's session; a missing header selects the default session
#[derive(Debug, Clone)]
pub struct Session(pub SessionKey);

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.get(SESSION_HEADER) {
            None => Ok(Session(SessionKey::default())),
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| Error::Validation("Invalid session id".to_string()))?;
                SessionKey::parse(raw.trim()).map(Session)
            }
        }
    }
}
