use std::sync::Arc;
use crate::config::Config;
use crate::services::CredentialStore;

// Application context shared with every handler, built once in main.
#[derive(Clone)]
pub struct AppState {
    pub store: CredentialStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: CredentialStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
