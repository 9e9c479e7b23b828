use std::sync::{Arc, Mutex};

use tradedesk_loader_csv::CsvLoader;
use tradedesk_store::ContractStore;
use tradedesk_views::{ConfigRevision, ViewService};

#[derive(Clone)]
pub struct AppState {
    pub revision: ConfigRevision,
    pub service: Arc<ViewService<CsvLoader>>,
    pub store: Arc<Mutex<ContractStore>>,
}
