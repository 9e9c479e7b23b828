use std::collections::HashMap;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use tradedesk_views::{
    ConfigDocument, View, ViewContext, ViewRequest, ViewResponse, config_document, custom_views,
};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn config(State(state): State<AppState>, headers: HeaderMap) -> Json<ConfigDocument> {
    let ctx = extract_context(&headers);
    Json(config_document(&ctx, state.revision))
}

pub async fn get_view(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Result<Json<View>, ApiError> {
    let ctx = extract_context(&headers);
    match custom_views(&ctx, state.revision).shift_remove(key.as_str()) {
        Some(view) => Ok(Json(view)),
        None => Err(ApiError::view_not_found(&key)),
    }
}

pub async fn view_data(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ViewResponse>, ApiError> {
    let ctx = extract_context(&headers);
    let metadata = extract_metadata(&headers);
    let request: ViewRequest = if body.is_empty() {
        ViewRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| ApiError::bad_request(e.to_string()))?
    };

    tokio::task::spawn_blocking(move || {
        let views = custom_views(&ctx, state.revision);
        let Some(view) = views.get(key.as_str()) else {
            return Err(ApiError::view_not_found(&key));
        };
        let mut store = state.store.lock().unwrap_or_else(|e| e.into_inner());
        let response = state
            .service
            .view_data(view, &mut store, &request, &metadata)?;
        Ok(Json(response))
    })
    .await
    .unwrap()
}

fn extract_context(headers: &HeaderMap) -> ViewContext {
    let get = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    };
    ViewContext::new(get("x-user"), get("x-party"), get("x-role"))
}

fn extract_metadata(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let key = name.as_str().strip_prefix("x-meta-")?;
            Some((key.to_string(), value.to_str().ok()?.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn context_reads_identity_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-user", HeaderValue::from_static("user-1"));
        headers.insert("x-party", HeaderValue::from_static("Alice"));
        headers.insert("x-role", HeaderValue::from_static("trader"));

        let ctx = extract_context(&headers);
        assert_eq!(ctx.user_id, "user-1");
        assert_eq!(ctx.party, "Alice");
        assert_eq!(ctx.role, "trader");
    }

    #[test]
    fn missing_headers_default_to_empty() {
        let ctx = extract_context(&HeaderMap::new());
        assert_eq!(ctx, ViewContext::default());
    }

    #[test]
    fn metadata_strips_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert("x-meta-region", HeaderValue::from_static("emea"));
        headers.insert("x-party", HeaderValue::from_static("Alice"));

        let metadata = extract_metadata(&headers);
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("region").map(String::as_str), Some("emea"));
    }
}
