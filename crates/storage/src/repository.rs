use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use learnify_core::model::{LearnerProfile, ProgressItem, Topic, TopicError, WeeklyGoal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::seed::mock_catalog;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid catalog: {0}")]
    Invalid(String),

    #[error(transparent)]
    Topic(#[from] TopicError),
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// Persisted shape for a topic card.
///
/// Keeps the icon as its symbolic name so catalogs stay readable on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecord {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub dark_color: String,
}

impl TopicRecord {
    #[must_use]
    pub fn from_topic(topic: &Topic) -> Self {
        Self {
            title: topic.title().to_owned(),
            description: topic.description().to_owned(),
            icon: topic.icon().to_string(),
            color: topic.color().to_owned(),
            dark_color: topic.dark_color().to_owned(),
        }
    }

    /// Convert the record back into a domain `Topic`.
    ///
    /// # Errors
    ///
    /// Returns `TopicError` for a blank title or an unknown icon name.
    pub fn into_topic(self) -> Result<Topic, TopicError> {
        let icon = self.icon.parse()?;
        Topic::new(self.title, self.description, icon, self.color, self.dark_color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub subject: String,
    pub percentage: u32,
    pub color: String,
}

impl ProgressRecord {
    #[must_use]
    pub fn into_item(self) -> ProgressItem {
        ProgressItem::new(self.subject, self.percentage, self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub goal_minutes: u32,
    pub achieved_minutes: u32,
    #[serde(default)]
    pub trend_percent: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub avatar_initials: String,
}

/// Everything the dashboard reads, as stored in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub profile: ProfileRecord,
    pub topics: Vec<TopicRecord>,
    pub progress: Vec<ProgressRecord>,
    pub weekly_goal: GoalRecord,
}

//
// ─── REPOSITORY ────────────────────────────────────────────────────────────────
//

/// Read-only source of dashboard content.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the profile cannot be read.
    async fn learner_profile(&self) -> Result<LearnerProfile, StorageError>;

    /// Topics in display order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if topics cannot be read.
    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if progress items cannot be read.
    async fn list_progress(&self) -> Result<Vec<ProgressItem>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the goal cannot be read.
    async fn weekly_goal(&self) -> Result<WeeklyGoal, StorageError>;

    /// Week-over-week change in study time, in percent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the trend cannot be read.
    async fn weekly_trend_percent(&self) -> Result<i32, StorageError>;
}

#[derive(Debug)]
struct CatalogData {
    profile: LearnerProfile,
    topics: Vec<Topic>,
    progress: Vec<ProgressItem>,
    goal: WeeklyGoal,
    trend_percent: i32,
}

/// In-memory catalog, validated once at construction.
#[derive(Clone, Debug)]
pub struct InMemoryCatalog {
    data: Arc<CatalogData>,
}

impl InMemoryCatalog {
    /// Catalog holding the built-in mock content.
    ///
    /// # Panics
    ///
    /// Panics if the built-in catalog is invalid.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_record(mock_catalog()).expect("built-in catalog should be valid")
    }

    /// Validate a record and build a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Topic` for invalid topics and
    /// `StorageError::Invalid` when two topics share a title.
    pub fn from_record(record: CatalogRecord) -> Result<Self, StorageError> {
        let mut seen = HashSet::new();
        let mut topics = Vec::with_capacity(record.topics.len());
        for raw in record.topics {
            let topic = raw.into_topic()?;
            if !seen.insert(topic.title().to_owned()) {
                return Err(StorageError::Invalid(format!(
                    "duplicate topic title: {}",
                    topic.title()
                )));
            }
            topics.push(topic);
        }

        let data = CatalogData {
            profile: LearnerProfile::new(record.profile.name, record.profile.avatar_initials),
            topics,
            progress: record
                .progress
                .into_iter()
                .map(ProgressRecord::into_item)
                .collect(),
            goal: WeeklyGoal::new(
                record.weekly_goal.goal_minutes,
                record.weekly_goal.achieved_minutes,
            ),
            trend_percent: record.weekly_goal.trend_percent,
        };
        Ok(Self {
            data: Arc::new(data),
        })
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed JSON, or any error
    /// from [`InMemoryCatalog::from_record`].
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let record: CatalogRecord =
            serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
        Self::from_record(record)
    }

    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read, or any error
    /// from [`InMemoryCatalog::from_json`].
    pub fn from_json_file(path: &Path) -> Result<Self, StorageError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StorageError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn learner_profile(&self) -> Result<LearnerProfile, StorageError> {
        Ok(self.data.profile.clone())
    }

    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError> {
        Ok(self.data.topics.clone())
    }

    async fn list_progress(&self) -> Result<Vec<ProgressItem>, StorageError> {
        Ok(self.data.progress.clone())
    }

    async fn weekly_goal(&self) -> Result<WeeklyGoal, StorageError> {
        Ok(self.data.goal)
    }

    async fn weekly_trend_percent(&self) -> Result<i32, StorageError> {
        Ok(self.data.trend_percent)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            catalog: Arc::new(InMemoryCatalog::seeded()),
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the catalog file cannot be loaded.
    pub fn from_catalog_file(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            catalog: Arc::new(InMemoryCatalog::from_json_file(path)?),
        })
    }
}
