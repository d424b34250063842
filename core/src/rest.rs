//! REST URL construction and response unwrapping.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::types::{Collection, Envelope};

/// `{api_base}/{segments...}?{query}`.
///
/// Segments are percent-encoded as path segments; `query` is appended as
/// given so bracketed filter keys stay literal.
pub fn endpoint(api_base: &str, segments: &[&str], query: &str) -> Result<String, ApiError> {
    let mut url =
        Url::parse(api_base).map_err(|e| ApiError::InvalidUrl(format!("{api_base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(format!("{api_base}: cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.set_query(Some(query));
    }
    Ok(url.into())
}

/// `populate=...` query for single-record requests. Defaults to `*`.
pub fn populate_query(populate: Option<&str>) -> String {
    let value = populate.filter(|p| !p.is_empty()).unwrap_or("*");
    format!("populate={value}")
}

pub fn parse_collection<T: DeserializeOwned>(body: &str) -> Result<Collection<T>, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// `data` of a `{"data": T | null}` envelope.
pub fn parse_single<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.data)
}
