use std::sync::Arc;

use crate::shared::config::Config;
use crate::shared::data::source::SalesDataSource;
use crate::system::auth::jwt::JwtKeys;
use crate::system::sessions::SessionStore;

/// Everything a handler needs, passed through the router
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub data: SalesDataSource,
    pub sessions: SessionStore,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let data = SalesDataSource::generate(&config.sample_data);
        let jwt = JwtKeys::from_config(&config.auth);
        Self::with_parts(config, data, jwt)
    }

    pub fn with_parts(config: Config, data: SalesDataSource, jwt: JwtKeys) -> Self {
        Self {
            config: Arc::new(config),
            data,
            sessions: SessionStore::new(),
            jwt,
        }
    }
}
