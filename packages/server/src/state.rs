use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::SessionFactory;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionFactory>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionFactory>, config: AppConfig) -> Self {
        Self { sessions, config }
    }
}
