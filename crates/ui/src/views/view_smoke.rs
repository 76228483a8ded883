use std::sync::Arc;

use async_trait::async_trait;
use learnify_core::fact::FAILED_FACT_MESSAGE;
use learnify_core::model::{ColorMode, LearnerProfile, ProgressItem, Topic, WeeklyGoal};
use storage::repository::{CatalogRepository, InMemoryCatalog, StorageError};
use storage::seed::mock_catalog;

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_catalog};
use crate::vm::{GENERATE_LABEL, GENERATING_LABEL};

async fn render_when(harness: &mut ViewHarness, needle: &str) -> String {
    let found = harness.drive_until(|h| h.render().contains(needle)).await;
    let html = harness.render();
    assert!(found, "missing {needle} in {html}");
    html
}

fn animal_topic() -> Topic {
    mock_catalog()
        .topics
        .into_iter()
        .find(|record| record.title == "Animal Kingdom")
        .and_then(|record| record.into_topic().ok())
        .expect("seeded topic")
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_catalog() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();

    let html = render_when(&mut harness, "Featured Topics").await;
    for expected in [
        "Welcome Back, Alex!",
        "Learnify",
        "Fun with Math",
        "Creative Stories",
        "Your Progress",
        "Math Puzzles",
        "75%",
        "width: 60%",
        "Weekly Goal Progress",
        "You've studied 240 out of 300 minutes.",
        "Trending up by 15% this week",
        "nav__link nav__link--active",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("modal-backdrop"), "modal open too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn selecting_topic_opens_modal_and_generate_falls_back() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    render_when(&mut harness, "Featured Topics").await;

    let handles = harness.handles.clone();
    harness.in_runtime(|| handles.select().call(animal_topic()));
    let html = render_when(&mut harness, "modal-backdrop").await;
    assert!(html.contains("Discover amazing animals and their homes."), "{html}");
    assert!(html.contains(GENERATE_LABEL), "{html}");
    assert!(!html.contains("modal__result"), "{html}");
    assert!(html.contains(r#"tabindex="-1""#), "backdrop not focusable in {html}");

    harness.in_runtime(|| handles.generate().call(()));
    let loading = harness.in_runtime(|| handles.session().peek().is_loading());
    assert!(loading);
    // A second press while loading is ignored.
    harness.in_runtime(|| handles.generate().call(()));

    let html = render_when(&mut harness, FAILED_FACT_MESSAGE).await;
    assert!(!html.contains(GENERATING_LABEL), "{html}");
    assert!(html.contains(GENERATE_LABEL), "{html}");

    harness.in_runtime(|| handles.close().call(()));
    let closed = harness
        .drive_until(|h| !h.render().contains("modal-backdrop"))
        .await;
    assert!(closed, "modal still open in {}", harness.render());
    let session = harness.in_runtime(|| handles.session().peek().clone());
    assert!(!session.is_open());
    assert_eq!(session.content(), "");
}

#[tokio::test(flavor = "current_thread")]
async fn reopening_clears_previous_fact() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    render_when(&mut harness, "Featured Topics").await;

    let handles = harness.handles.clone();
    harness.in_runtime(|| handles.select().call(animal_topic()));
    harness.in_runtime(|| handles.generate().call(()));
    render_when(&mut harness, FAILED_FACT_MESSAGE).await;

    harness.in_runtime(|| handles.select().call(animal_topic()));
    let cleared = harness
        .drive_until(|h| !h.render().contains(FAILED_FACT_MESSAGE))
        .await;
    assert!(cleared, "stale fact shown in {}", harness.render());
    assert!(harness.render().contains("modal-backdrop"));
}

struct FailingCatalog;

#[async_trait]
impl CatalogRepository for FailingCatalog {
    async fn learner_profile(&self) -> Result<LearnerProfile, StorageError> {
        Err(StorageError::Io("offline".to_string()))
    }

    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError> {
        Err(StorageError::Io("offline".to_string()))
    }

    async fn list_progress(&self) -> Result<Vec<ProgressItem>, StorageError> {
        Err(StorageError::Io("offline".to_string()))
    }

    async fn weekly_goal(&self) -> Result<WeeklyGoal, StorageError> {
        Err(StorageError::Io("offline".to_string()))
    }

    async fn weekly_trend_percent(&self) -> Result<i32, StorageError> {
        Err(StorageError::Io("offline".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_error_state() {
    let mut harness =
        setup_view_harness_with_catalog(ViewKind::Dashboard, Arc::new(FailingCatalog), None);
    harness.rebuild();
    let html = render_when(&mut harness, "Something went wrong").await;
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_follows_color_preference() {
    let mut harness = setup_view_harness_with_catalog(
        ViewKind::Shell,
        Arc::new(InMemoryCatalog::seeded()),
        Some(ColorMode::Dark),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("app-root dark"), "missing dark class in {html}");

    harness.preference.set(Some(ColorMode::Light));
    let html = render_when(&mut harness, r#"data-theme="light""#).await;
    assert!(!html.contains("app-root dark"), "{html}");

    harness.preference.set(None);
    harness.preference.set(Some(ColorMode::Dark));
    render_when(&mut harness, "app-root dark").await;
}

#[tokio::test(flavor = "current_thread")]
async fn unavailable_preference_renders_light() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(r#"class="app-root""#), "{html}");
    assert!(html.contains(r#"data-theme="light""#), "{html}");
}
