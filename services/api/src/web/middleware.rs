//! services/api/src/web/middleware.rs
//!
//! Cross-origin policy for browser clients of the API.

use crate::config::ConfigError;
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer. An empty origin list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                ConfigError::InvalidValue("ALLOWED_ORIGINS".to_string(), e.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
