use std::sync::Arc;

use services::{DashboardService, FactService, PreferenceSource, ThemeSynchronizer};

pub trait UiApp: Send + Sync {
    fn dashboard(&self) -> Arc<DashboardService>;
    fn facts(&self) -> Arc<FactService>;
    fn theme(&self) -> ThemeSynchronizer;
    fn preference(&self) -> Arc<dyn PreferenceSource>;
}

#[derive(Clone)]
pub struct AppContext {
    dashboard: Arc<DashboardService>,
    facts: Arc<FactService>,
    theme: ThemeSynchronizer,
    preference: Arc<dyn PreferenceSource>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            dashboard: app.dashboard(),
            facts: app.facts(),
            theme: app.theme(),
            preference: app.preference(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
