#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod fact_service;
pub mod theme;

pub use app_services::AppServices;
pub use dashboard_service::{DashboardService, DashboardSnapshot};
pub use error::{DashboardError, FactError};
pub use fact_service::{
    API_KEY_VAR, BASE_URL_VAR, FactService, FactServiceConfig, MODEL_VAR, TIMEOUT_SECS_VAR,
};
pub use theme::{
    DEFAULT_POLL_INTERVAL, ManualPreference, PreferenceSource, SystemPreference, ThemeSubscription,
    ThemeSynchronizer,
};
