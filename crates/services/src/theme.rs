//! Keeps the dashboard palette in step with the host's light/dark preference.
//!
//! A [`PreferenceSource`] publishes the host preference through a `watch`
//! channel (`None` when the host cannot tell). [`ThemeSynchronizer`] turns
//! that into the applied [`ColorMode`], which the UI observes. Attaching
//! returns a [`ThemeSubscription`]; cancelling or dropping it stops updates.

use std::sync::Arc;
use std::time::Duration;

use dark_light::{Mode as OsThemeMode, detect as detect_os_theme};
use learnify_core::model::ColorMode;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default delay between two OS preference probes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

pub trait PreferenceSource: Send + Sync {
    /// Receiver of the current host preference and its later changes.
    fn watch(&self) -> watch::Receiver<Option<ColorMode>>;
}

//
// ─── SOURCES ───────────────────────────────────────────────────────────────────
//

/// Polls the operating system for its color scheme.
pub struct SystemPreference {
    tx: Arc<watch::Sender<Option<ColorMode>>>,
    task: JoinHandle<()>,
}

impl SystemPreference {
    /// Probe the OS once, then keep probing every `interval` on the current
    /// tokio runtime. Only actual changes are published.
    #[must_use]
    pub fn spawn(interval: Duration) -> Self {
        let (tx, _rx) = watch::channel(Some(detect_mode()));
        let tx = Arc::new(tx);
        let publisher = Arc::clone(&tx);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Ok(mode) = tokio::task::spawn_blocking(detect_mode).await else {
                    tracing::warn!("color scheme probe panicked");
                    continue;
                };
                publisher.send_if_modified(|current| {
                    if *current == Some(mode) {
                        return false;
                    }
                    *current = Some(mode);
                    true
                });
            }
        });
        Self { tx, task }
    }
}

impl PreferenceSource for SystemPreference {
    fn watch(&self) -> watch::Receiver<Option<ColorMode>> {
        self.tx.subscribe()
    }
}

impl Drop for SystemPreference {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn detect_mode() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

/// A preference driven by hand: a fixed `--theme` choice, or tests.
pub struct ManualPreference {
    tx: watch::Sender<Option<ColorMode>>,
}

impl ManualPreference {
    #[must_use]
    pub fn new(initial: Option<ColorMode>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Publish a new preference. Every call notifies subscribers.
    pub fn set(&self, mode: Option<ColorMode>) {
        self.tx.send_replace(mode);
    }
}

impl PreferenceSource for ManualPreference {
    fn watch(&self) -> watch::Receiver<Option<ColorMode>> {
        self.tx.subscribe()
    }
}

//
// ─── SYNCHRONIZER ──────────────────────────────────────────────────────────────
//

/// Process-wide applied color mode.
#[derive(Clone)]
pub struct ThemeSynchronizer {
    applied: Arc<watch::Sender<ColorMode>>,
}

impl Default for ThemeSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSynchronizer {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ColorMode::default());
        Self {
            applied: Arc::new(tx),
        }
    }

    #[must_use]
    pub fn current(&self) -> ColorMode {
        *self.applied.borrow()
    }

    /// Receiver notified each time a mode is applied.
    #[must_use]
    pub fn observe(&self) -> watch::Receiver<ColorMode> {
        self.applied.subscribe()
    }

    /// Apply the source's current preference and follow its changes until the
    /// returned subscription is cancelled or dropped.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn attach(&self, source: &dyn PreferenceSource) -> ThemeSubscription {
        let mut prefs = source.watch();
        let initial = resolve(*prefs.borrow_and_update());
        self.applied.send_replace(initial);
        tracing::debug!(mode = %initial, "applied initial color mode");

        let applied = Arc::clone(&self.applied);
        let task = tokio::spawn(async move {
            while prefs.changed().await.is_ok() {
                let mode = resolve(*prefs.borrow_and_update());
                applied.send_replace(mode);
                tracing::debug!(mode = %mode, "applied color mode change");
            }
        });
        ThemeSubscription { task: Some(task) }
    }
}

fn resolve(preference: Option<ColorMode>) -> ColorMode {
    preference.unwrap_or_default()
}

/// Handle to a running preference subscription.
#[derive(Debug)]
pub struct ThemeSubscription {
    task: Option<JoinHandle<()>>,
}

impl ThemeSubscription {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop following preference changes. The applied mode is left as is.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_secs(1);

    #[tokio::test]
    async fn attach_applies_initial_preference() {
        let source = ManualPreference::new(Some(ColorMode::Dark));
        let sync = ThemeSynchronizer::new();
        assert_eq!(sync.current(), ColorMode::Light);

        let subscription = sync.attach(&source);
        assert!(subscription.is_active());
        assert_eq!(sync.current(), ColorMode::Dark);
    }

    #[tokio::test]
    async fn unavailable_preference_defaults_to_light() {
        let source = ManualPreference::new(None);
        let sync = ThemeSynchronizer::new();
        let _subscription = sync.attach(&source);
        assert_eq!(sync.current(), ColorMode::Light);
    }

    #[tokio::test]
    async fn each_notification_applies_once() {
        let source = ManualPreference::new(Some(ColorMode::Light));
        let sync = ThemeSynchronizer::new();
        let mut observed = sync.observe();
        let _subscription = sync.attach(&source);
        observed.borrow_and_update();

        source.set(Some(ColorMode::Dark));
        tokio::time::timeout(WAIT, observed.changed())
            .await
            .expect("notified")
            .expect("sender alive");
        assert_eq!(*observed.borrow_and_update(), ColorMode::Dark);

        let extra = tokio::time::timeout(Duration::from_millis(50), observed.changed()).await;
        assert!(extra.is_err(), "mode applied more than once");

        source.set(Some(ColorMode::Light));
        tokio::time::timeout(WAIT, observed.changed())
            .await
            .expect("notified")
            .expect("sender alive");
        assert_eq!(*observed.borrow_and_update(), ColorMode::Light);
    }

    #[tokio::test]
    async fn cancel_stops_updates() {
        let source = ManualPreference::new(Some(ColorMode::Light));
        let sync = ThemeSynchronizer::new();
        let mut observed = sync.observe();
        let mut subscription = sync.attach(&source);
        observed.borrow_and_update();

        source.set(Some(ColorMode::Dark));
        tokio::time::timeout(WAIT, observed.changed())
            .await
            .expect("notified")
            .expect("sender alive");

        subscription.cancel();
        assert!(!subscription.is_active());
        source.set(Some(ColorMode::Light));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(sync.current(), ColorMode::Dark);
    }

    #[tokio::test]
    async fn dropping_subscription_unsubscribes() {
        let source = ManualPreference::new(Some(ColorMode::Light));
        let sync = ThemeSynchronizer::new();
        drop(sync.attach(&source));

        source.set(Some(ColorMode::Dark));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(sync.current(), ColorMode::Light);
    }
}
