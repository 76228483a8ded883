mod dashboard;
mod goal;
mod header;
mod modal;
mod progress;
mod state;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use goal::WeeklyGoalCard;
pub use header::Header;
pub use modal::TopicModal;
pub use progress::ProgressPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topics::{TopicCard, TopicGrid};
