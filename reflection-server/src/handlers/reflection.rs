//! Reflection handlers

use crate::error::ApiError;
use axum::{
    body::Bytes,
    http::{header, HeaderMap, Uri},
    response::Redirect,
    Json,
};
use reflection_core::{sample_reflections, NewReflection, Reflection, ReflectionReceipt};

/// Path the reflection router is mounted at
pub const REFLECTION_PATH: &str = "/reflection/";

/// Accept a reflection and echo it back. Nothing is stored.
///
/// The body is read as JSON when the request declares a JSON media type or
/// declares none at all.
pub async fn create_reflection(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ReflectionReceipt>, ApiError> {
    let reflection = NewReflection::from_body(&body, declares_json(&headers))?;

    tracing::debug!(chars = reflection.content.chars().count(), "Reflection received");

    Ok(Json(reflection.acknowledge()))
}

/// List reflections
pub async fn get_reflections() -> Json<Vec<Reflection>> {
    Json(sample_reflections())
}

/// `/reflection` without the trailing slash. The query string is kept.
pub async fn redirect_to_reflections(uri: Uri) -> Redirect {
    match uri.query() {
        Some(query) => Redirect::temporary(&format!("{}?{}", REFLECTION_PATH, query)),
        None => Redirect::temporary(REFLECTION_PATH),
    }
}

/// True when `Content-Type` is absent, `application/json` or `application/*+json`
pub fn declares_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
