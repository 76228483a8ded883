pub mod app;
pub mod context;
pub mod icons;
pub mod theme;
pub mod vm;
pub mod views;

pub use app::{App, ThemedShell};
pub use context::{AppContext, UiApp, build_app_context};
