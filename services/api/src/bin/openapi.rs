//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI document for the emotion-analysis routes.
//!
//! Usage: `openapi [OUTPUT]` (defaults to `openapi.json`).

use api_lib::web::rest::ApiDoc;
use std::path::PathBuf;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("openapi.json"));

    let document = ApiDoc::openapi();
    let route_count = document.paths.paths.len();
    std::fs::write(&output, document.to_pretty_json()?)?;

    println!(
        "Wrote OpenAPI document with {} routes to {}",
        route_count,
        output.display()
    );
    Ok(())
}
