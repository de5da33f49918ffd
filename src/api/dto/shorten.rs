//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Semantic validation (scheme, host)
    /// happens in the service's URL codec.
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Response returned after a successful shorten.
///
/// Repeated requests for the same URL return the same `code`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
}
