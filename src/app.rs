use crate::config::Config;
use crate::news::{
    fetch_detail_with_timeout, spawn_ticker, Category, DetailError, Headline, NewsItem,
    ReadCounter,
};
use crate::theme::{StyleMap, ThemeVariant};
use futures::FutureExt;
use ratatui::style::Style;
use std::borrow::Cow;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long a transient status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

// ============================================================================
// Focus and Fetch State
// ============================================================================

/// Which control receives Enter/Space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Button,
}

/// State of the detail fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Failed { error: String },
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Events from background tasks
#[derive(Debug)]
pub enum AppEvent {
    /// Ticker emitted an item.
    ///
    /// Fields:
    /// - `generation`: The ticker generation that produced it; stale generations are dropped
    /// - `item`: Decorated headline
    NewsTick { generation: u64, item: NewsItem },
    /// Detail fetch finished.
    ///
    /// Fields:
    /// - `title`: The headline the fetch was started for
    /// - `result`: Report text, or why it failed
    DetailLoaded {
        title: String,
        result: Result<String, DetailError>,
    },
}

// ============================================================================
// Application State
// ============================================================================

/// Screen state. Owned and mutated by the UI loop only; background tasks
/// report back through `AppEvent`.
pub struct App {
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    /// What the ticker card shows.
    pub headline: Headline,
    /// Active filter.
    pub category: Category,
    /// Chip under the keyboard cursor; selected on Enter.
    pub chip_cursor: Category,
    pub focus: Focus,

    pub read_counter: ReadCounter,
    pub fetch_status: FetchStatus,
    /// Last fetched report; empty while loading or before the first fetch.
    pub detail_text: String,

    pub platform: String,
    pub subtitle: String,

    pub tick_interval: Duration,
    pub detail_delay: Duration,
    pub detail_timeout: Duration,

    ticker_handle: Option<JoinHandle<()>>,
    ticker_generation: u64,

    /// Animation counter advanced on every UI tick.
    pub pulse_frame: usize,
    pub needs_redraw: bool,
    pub status_message: Option<(Cow<'static, str>, Instant)>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, falling back to dark");
            ThemeVariant::Dark
        });
        let category = config.initial_category();

        Self {
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            headline: Headline::connecting(),
            category,
            chip_cursor: category,
            focus: Focus::Button,
            read_counter: ReadCounter::new(),
            fetch_status: FetchStatus::Idle,
            detail_text: String::new(),
            platform: platform_label(),
            subtitle: config.subtitle.clone(),
            tick_interval: config.tick_interval(),
            detail_delay: config.detail_delay(),
            detail_timeout: config.detail_timeout(),
            ticker_handle: None,
            ticker_generation: 0,
            pulse_frame: 0,
            needs_redraw: true,
            status_message: None,
        }
    }

    /// Resolve a theme role to its concrete `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Cycle to the next theme variant (Dark → Light → Dark).
    ///
    /// Returns the name of the new theme for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.theme_variant = next;
        self.theme = StyleMap::from_palette(&next.palette());
        self.needs_redraw = true;
        next.name()
    }

    // ------------------------------------------------------------------------
    // Ticker
    // ------------------------------------------------------------------------

    /// Current ticker generation. Events tagged with any other value are stale.
    pub fn ticker_generation(&self) -> u64 {
        self.ticker_generation
    }

    /// (Re)start the emission loop for the active filter from tick zero.
    ///
    /// Aborts any running loop first so at most one is active.
    pub fn start_ticker(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        if let Some(handle) = self.ticker_handle.take() {
            handle.abort();
            tracing::debug!(generation = self.ticker_generation, "Aborted previous ticker");
        }

        self.ticker_generation = self.ticker_generation.wrapping_add(1);
        let generation = self.ticker_generation;

        self.ticker_handle = Some(spawn_ticker(
            self.category,
            self.tick_interval,
            event_tx.clone(),
            move |item| AppEvent::NewsTick { generation, item },
        ));
    }

    /// Replace the filter, show the filtering placeholder and restart the ticker.
    ///
    /// Choosing the already-active category is a no-op. Returns whether the
    /// filter changed.
    pub fn select_category(
        &mut self,
        category: Category,
        event_tx: &mpsc::Sender<AppEvent>,
    ) -> bool {
        self.chip_cursor = category;
        if category == self.category {
            return false;
        }

        tracing::info!(from = %self.category, to = %category, "Category filter changed");
        self.category = category;
        self.headline = Headline::filtering(category);
        self.needs_redraw = true;
        self.start_ticker(event_tx);
        true
    }

    /// Apply a ticker emission. Returns false if it came from a replaced loop.
    pub fn apply_news_tick(&mut self, generation: u64, item: NewsItem) -> bool {
        if generation != self.ticker_generation {
            tracing::debug!(
                generation,
                current = self.ticker_generation,
                "Discarding stale ticker emission"
            );
            return false;
        }
        self.headline = Headline::Live(item);
        true
    }

    pub fn move_chip_cursor(&mut self, forward: bool) {
        self.chip_cursor = if forward {
            self.chip_cursor.next()
        } else {
            self.chip_cursor.prev()
        };
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Categories => Focus::Button,
            Focus::Button => Focus::Categories,
        };
    }

    // ------------------------------------------------------------------------
    // Read action / detail fetch
    // ------------------------------------------------------------------------

    /// Whether the read action is currently accepted.
    pub fn can_request_detail(&self) -> bool {
        !self.fetch_status.is_loading()
    }

    /// Count a read and fetch the detail for the displayed headline.
    ///
    /// Rejected while a fetch is in flight; the pending fetch is never
    /// cancelled. Returns whether a fetch was started.
    pub fn request_detail(&mut self, event_tx: &mpsc::Sender<AppEvent>) -> bool {
        if !self.can_request_detail() {
            tracing::debug!("Detail fetch already in progress, ignoring read action");
            return false;
        }

        let count = self.read_counter.increment();
        self.fetch_status = FetchStatus::Loading;
        self.detail_text.clear();
        self.needs_redraw = true;

        let title = self.headline.title().to_string();
        let delay = self.detail_delay;
        let timeout = self.detail_timeout;
        let tx = event_tx.clone();

        tracing::debug!(title = %title, count, "Spawning detail fetch");

        tokio::spawn(async move {
            let result =
                match catch_task_panic(fetch_detail_with_timeout(&title, delay, timeout)).await {
                    Ok(result) => result,
                    Err(panic) => {
                        tracing::error!(error = %panic, "Detail fetch task panicked");
                        Err(DetailError::Panicked(panic))
                    }
                };

            if let Err(e) = tx.send(AppEvent::DetailLoaded { title, result }).await {
                tracing::warn!(error = %e, "Failed to send detail result (receiver dropped)");
            }
        });

        true
    }

    /// Apply a finished detail fetch.
    pub fn apply_detail(&mut self, result: Result<String, DetailError>) {
        match result {
            Ok(text) => {
                self.detail_text = text;
                self.fetch_status = FetchStatus::Idle;
            }
            Err(e) => {
                self.detail_text.clear();
                self.fetch_status = FetchStatus::Failed {
                    error: e.to_string(),
                };
                self.set_status(format!("Gagal memuat detail: {}", e));
            }
        }
    }

    /// Label for the status card.
    pub fn status_label(&self) -> &'static str {
        match self.fetch_status {
            FetchStatus::Idle => "Siap",
            FetchStatus::Loading => "Loading…",
            FetchStatus::Failed { .. } => "Gagal",
        }
    }

    pub fn read_count(&self) -> u64 {
        self.read_counter.get()
    }

    // ------------------------------------------------------------------------
    // Animation and status line
    // ------------------------------------------------------------------------

    pub fn advance_pulse(&mut self) {
        self.pulse_frame = self.pulse_frame.wrapping_add(1);
    }

    /// Whether the LIVE dot is in its bright phase (flips every four frames).
    pub fn pulse_bright(&self) -> bool {
        (self.pulse_frame / 4) % 2 == 0
    }

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired. Returns true if a message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed() >= STATUS_TTL {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Stop background work owned by the app.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.ticker_handle.take() {
            handle.abort();
            tracing::debug!("Ticker stopped");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Run a future, converting a panic inside it into an error string.
async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            }
        })
}

/// Host OS and architecture, e.g. "Linux x86_64".
pub fn platform_label() -> String {
    let os = match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "android" => "Android",
        "ios" => "iOS",
        "freebsd" => "FreeBSD",
        other => other,
    };
    format!("{} {}", os, std::env::consts::ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::catalog;
    use pretty_assertions::assert_eq;

    fn test_app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn initial_state() {
        let app = test_app();
        assert_eq!(app.headline, Headline::connecting());
        assert_eq!(app.category, Category::All);
        assert_eq!(app.read_count(), 0);
        assert_eq!(app.status_label(), "Siap");
        assert!(app.detail_text.is_empty());
        assert_eq!(app.ticker_generation(), 0);
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        assert_eq!(App::new(&config).theme_variant, ThemeVariant::Dark);
    }

    #[test]
    fn initial_category_from_config() {
        let config = Config {
            initial_category: "Game".to_string(),
            ..Config::default()
        };
        let app = App::new(&config);
        assert_eq!(app.category, Category::Game);
        assert_eq!(app.chip_cursor, Category::Game);
    }

    #[tokio::test(start_paused = true)]
    async fn select_category_resets_headline_and_bumps_generation() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = test_app();
        app.start_ticker(&tx);
        assert_eq!(app.ticker_generation(), 1);

        assert!(app.select_category(Category::Tech, &tx));
        assert_eq!(app.category, Category::Tech);
        assert_eq!(app.headline.title(), "Memfilter kategori: Tech…");
        assert_eq!(app.ticker_generation(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn reselecting_same_category_is_noop() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = test_app();
        app.start_ticker(&tx);
        app.apply_news_tick(1, catalog()[0].decorated());

        assert!(!app.select_category(Category::All, &tx));
        assert_eq!(app.ticker_generation(), 1);
        assert!(!app.headline.is_pending());
    }

    #[test]
    fn stale_tick_is_discarded() {
        let mut app = test_app();
        app.ticker_generation = 3;
        assert!(!app.apply_news_tick(2, catalog()[0].decorated()));
        assert!(app.headline.is_pending());
        assert!(app.apply_news_tick(3, catalog()[0].decorated()));
        assert_eq!(app.headline.chip_label(), "Religi");
    }

    #[tokio::test(start_paused = true)]
    async fn read_action_rejected_while_loading() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = test_app();

        assert!(app.request_detail(&tx));
        assert_eq!(app.status_label(), "Loading…");
        assert!(!app.request_detail(&tx));
        assert_eq!(app.read_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn read_count_tracks_accepted_actions() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = test_app();

        for k in 1..=3u64 {
            assert!(app.request_detail(&tx));
            assert_eq!(app.read_count(), k);
            match rx.recv().await.unwrap() {
                AppEvent::DetailLoaded { result, .. } => app.apply_detail(result),
                other => panic!("unexpected event: {:?}", other),
            }
            assert_eq!(app.status_label(), "Siap");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn detail_uses_displayed_title() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = test_app();
        app.apply_news_tick(0, catalog()[2].decorated());

        app.request_detail(&tx);
        let AppEvent::DetailLoaded { title, result } = rx.recv().await.unwrap() else {
            panic!("expected DetailLoaded");
        };
        assert_eq!(title, "[Game] BTR Raih Juara Dunia di Grand Finals MLBB");
        app.apply_detail(result);
        assert!(app.detail_text.contains(&title));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_surfaces_as_failed() {
        let config = Config {
            detail_delay_ms: 5000,
            detail_timeout_ms: 100,
            ..Config::default()
        };
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = App::new(&config);

        app.request_detail(&tx);
        let AppEvent::DetailLoaded { result, .. } = rx.recv().await.unwrap() else {
            panic!("expected DetailLoaded");
        };
        app.apply_detail(result);
        assert_eq!(app.status_label(), "Gagal");
        assert!(app.detail_text.is_empty());
        assert!(app.status_message.is_some());
        // Failure re-enables the action.
        assert!(app.can_request_detail());
    }

    #[test]
    fn chip_cursor_wraps() {
        let mut app = test_app();
        app.move_chip_cursor(false);
        assert_eq!(app.chip_cursor, Category::Ekonomi);
        app.move_chip_cursor(true);
        assert_eq!(app.chip_cursor, Category::All);
    }

    #[test]
    fn pulse_alternates() {
        let mut app = test_app();
        assert!(app.pulse_bright());
        for _ in 0..4 {
            app.advance_pulse();
        }
        assert!(!app.pulse_bright());
    }

    #[test]
    fn cycle_theme_switches_variant() {
        let mut app = test_app();
        assert_eq!(app.cycle_theme(), "Light");
        assert_eq!(app.theme_variant, ThemeVariant::Light);
    }

    #[tokio::test(start_paused = true)]
    async fn status_message_expires() {
        let mut app = test_app();
        app.set_status("hello");
        assert!(!app.clear_expired_status());
        tokio::time::advance(Duration::from_secs(3)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn platform_label_is_not_empty() {
        assert!(platform_label().contains(std::env::consts::ARCH));
    }
}
