use std::sync::Arc;

use crate::{config::Config, services::redirect_service::RedirectService};

#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let redirect_service = Arc::new(RedirectService::new(config.prodigy_base_url.clone()));

        Self {
            redirect_service,
            config: Arc::new(config),
        }
    }
}
