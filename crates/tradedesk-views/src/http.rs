use std::collections::HashMap;
use std::sync::Mutex;

use http::{Method, Request, Response, StatusCode};
use tradedesk_store::ContractStore;

use crate::error::ViewError;
use crate::loader::Loader;
use crate::provider::{ViewContext, config_document, custom_views};
use crate::request::ViewRequest;
use crate::service::ViewService;
use crate::version::ConfigRevision;

/// Transport-agnostic HTTP handler over the view service. Routes:
/// `GET /config` for the versioned configuration document and
/// `POST /views/{key}/data` for a view's rows.
pub struct ViewHttp<L: Loader> {
    revision: ConfigRevision,
    service: ViewService<L>,
    store: Mutex<ContractStore>,
}

impl<L: Loader> ViewHttp<L> {
    pub fn new(revision: ConfigRevision, service: ViewService<L>, store: ContractStore) -> Self {
        Self {
            revision,
            service,
            store: Mutex::new(store),
        }
    }

    pub fn service(&self) -> &ViewService<L> {
        &self.service
    }

    pub fn handle(&self, req: Request<Vec<u8>>) -> Response<Vec<u8>> {
        let path = req.uri().path().trim_end_matches('/');

        match (req.method(), path) {
            (&Method::GET, "/config") => self.get_config(&req),
            (&Method::POST, path) => match data_view_key(path) {
                Some(key) => self.get_data(key, &req),
                None => json_response(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#),
            },
            _ => json_response(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#),
        }
    }

    fn get_config(&self, req: &Request<Vec<u8>>) -> Response<Vec<u8>> {
        let ctx = extract_context(req);
        let document = config_document(&ctx, self.revision);
        match serde_json::to_vec(&document) {
            Ok(body) => json_response(StatusCode::OK, body),
            Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
        }
    }

    fn get_data(&self, key: &str, req: &Request<Vec<u8>>) -> Response<Vec<u8>> {
        let ctx = extract_context(req);
        let views = custom_views(&ctx, self.revision);
        let Some(view) = views.get(key) else {
            let err = ViewError::UnknownView(key.to_string());
            return error_response(err.status_code(), &err.to_string());
        };

        let request: ViewRequest = if req.body().is_empty() {
            ViewRequest::default()
        } else {
            match serde_json::from_slice(req.body()) {
                Ok(r) => r,
                Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
            }
        };

        let metadata = extract_metadata(req);
        let mut store = self.store.lock().unwrap_or_else(|e| e.into_inner());

        match self.service.view_data(view, &mut store, &request, &metadata) {
            Ok(response) => match serde_json::to_vec(&response) {
                Ok(body) => json_response(StatusCode::OK, body),
                Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
            },
            Err(e) => error_response(e.status_code(), &e.to_string()),
        }
    }
}

/// `/views/{key}/data` → `{key}`.
fn data_view_key(path: &str) -> Option<&str> {
    let key = path.strip_prefix("/views/")?.strip_suffix("/data")?;
    if key.is_empty() || key.contains('/') {
        None
    } else {
        Some(key)
    }
}

fn extract_context<T>(req: &Request<T>) -> ViewContext {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };
    ViewContext {
        user_id: header("x-user"),
        party: header("x-party"),
        role: header("x-role"),
    }
}

fn extract_metadata<T>(req: &Request<T>) -> HashMap<String, String> {
    req.headers()
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str();
            if let Some(key) = name.strip_prefix("x-meta-") {
                value
                    .to_str()
                    .ok()
                    .map(|v| (key.to_string(), v.to_string()))
            } else {
                None
            }
        })
        .collect()
}

fn json_response(status: StatusCode, body: impl Into<Vec<u8>>) -> Response<Vec<u8>> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn error_response(status: StatusCode, message: &str) -> Response<Vec<u8>> {
    let body = serde_json::json!({ "error": message });
    json_response(status, body.to_string().into_bytes())
}
