use std::sync::{Arc, Mutex};

use tradedesk_loader_csv::CsvLoader;
use tradedesk_store::ContractStore;
use tradedesk_views::{ConfigRevision, ViewService};

use tradedesk_api::routes;
use tradedesk_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let api_addr = std::env::var("TRADEDESK_API_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".into());
    let asset_file = std::env::var("TRADEDESK_ASSET_FILE").unwrap_or_else(|_| "assets.csv".into());
    let trade_file = std::env::var("TRADEDESK_TRADE_FILE").unwrap_or_else(|_| "trades.csv".into());
    let revision = std::env::var("TRADEDESK_REVISION")
        .ok()
        .and_then(|s| s.parse().ok())
        .and_then(ConfigRevision::from_major)
        .unwrap_or(ConfigRevision::V2);

    let state = AppState {
        revision,
        service: Arc::new(ViewService::new(CsvLoader::new(&asset_file, &trade_file))),
        store: Arc::new(Mutex::new(ContractStore::new())),
    };

    let app = routes::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&api_addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("failed to bind {api_addr}: {e}");
            std::process::exit(1);
        });

    tracing::info!(
        "tradedesk-api listening on {api_addr} (assets: {asset_file}, trades: {trade_file}, config v{})",
        revision.major()
    );
    axum::serve(listener, app).await.unwrap();
}
