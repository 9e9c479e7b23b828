mod cells;
mod config;
mod error;
pub mod http;
mod loader;
mod provider;
mod request;
mod service;
mod version;

pub use cells::status_label;
pub use config::{Alignment, CellFn, CellValue, Column, SourceKind, TableSource, View, ViewKind};
pub use error::ViewError;
pub use crate::http::ViewHttp;
pub use loader::{HttpLoader, Loader, NoopLoader};
pub use provider::{ConfigDocument, ViewContext, config_document, custom_views};
pub use request::{Row, ViewRequest, ViewResponse};
pub use service::{ViewService, merge_filters};
pub use version::{CONFIG_SCHEMA, ConfigRevision, SchemaVersion};
