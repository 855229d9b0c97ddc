//! Application Context
//!
//! Configuration and API client provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::omdb::OmdbClient;

#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub client: OmdbClient,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let client = OmdbClient::new(&config);
        Self { config, client }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
