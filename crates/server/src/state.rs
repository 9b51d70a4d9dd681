use moviehub_core::{Config, Hub, HubRegistry};

/// Shared application state
pub struct AppState {
    config: Config,
    hubs: HubRegistry,
}

impl AppState {
    pub fn new(config: Config, hubs: HubRegistry) -> Self {
        Self { config, hubs }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn hubs(&self) -> &HubRegistry {
        &self.hubs
    }

    pub fn hub(&self, slug: &str) -> Option<&Hub> {
        self.hubs.get(slug)
    }
}
