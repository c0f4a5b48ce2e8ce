use std::sync::Arc;

use crate::config::Config;
use crate::logger::Logger;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub log: Arc<Logger>,
}

impl AppState {
    pub fn new(config: Config, log: Arc<Logger>) -> Self {
        Self {
            config: Arc::new(config),
            log,
        }
    }
}
