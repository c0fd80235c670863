use crate::upstream::UpstreamConfig;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub upstream: Arc<UpstreamConfig>,
}

impl AppState {
    pub fn new(client: Client, upstream: UpstreamConfig) -> Self {
        Self {
            client,
            upstream: Arc::new(upstream),
        }
    }
}
