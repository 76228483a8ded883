use std::sync::Arc;

use learnify_core::model::{LearnerProfile, ProgressItem, Topic, WeeklyGoal};
use storage::repository::CatalogRepository;

use crate::error::DashboardError;

/// Everything the dashboard page renders, read in one go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub profile: LearnerProfile,
    pub topics: Vec<Topic>,
    pub progress: Vec<ProgressItem>,
    pub goal: WeeklyGoal,
    pub trend_percent: i32,
}

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<dyn CatalogRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Load the dashboard content from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError` if any part of the catalog cannot be read.
    pub async fn load(&self) -> Result<DashboardSnapshot, DashboardError> {
        let profile = self.catalog.learner_profile().await?;
        let topics = self.catalog.list_topics().await?;
        let progress = self.catalog.list_progress().await?;
        let goal = self.catalog.weekly_goal().await?;
        let trend_percent = self.catalog.weekly_trend_percent().await?;
        tracing::debug!(
            topics = topics.len(),
            progress = progress.len(),
            "loaded dashboard catalog"
        );

        Ok(DashboardSnapshot {
            profile,
            topics,
            progress,
            goal,
            trend_percent,
        })
    }
}
