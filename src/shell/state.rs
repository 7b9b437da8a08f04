use crate::shared::infrastructure::table_store::TableStore;
use crate::shell::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TableStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
