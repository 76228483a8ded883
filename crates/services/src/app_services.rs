use std::sync::Arc;

use storage::repository::Storage;

use crate::dashboard_service::DashboardService;
use crate::fact_service::{FactService, FactServiceConfig};
use crate::theme::{PreferenceSource, ThemeSynchronizer};

/// Assembles app-facing services from storage and configuration.
#[derive(Clone)]
pub struct AppServices {
    dashboard: Arc<DashboardService>,
    facts: Arc<FactService>,
    theme: ThemeSynchronizer,
    preference: Arc<dyn PreferenceSource>,
}

impl AppServices {
    #[must_use]
    pub fn new(
        storage: &Storage,
        fact_config: Option<FactServiceConfig>,
        preference: Arc<dyn PreferenceSource>,
    ) -> Self {
        let facts = FactService::new(fact_config);
        if !facts.enabled() {
            tracing::warn!("no API key configured; fun facts will show the fallback message");
        }

        Self {
            dashboard: Arc::new(DashboardService::new(Arc::clone(&storage.catalog))),
            facts: Arc::new(facts),
            theme: ThemeSynchronizer::new(),
            preference,
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn facts(&self) -> Arc<FactService> {
        Arc::clone(&self.facts)
    }

    #[must_use]
    pub fn theme(&self) -> ThemeSynchronizer {
        self.theme.clone()
    }

    #[must_use]
    pub fn preference(&self) -> Arc<dyn PreferenceSource> {
        Arc::clone(&self.preference)
    }
}
