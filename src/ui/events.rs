//! Application event handling.
//!
//! Applies results from the ticker and detail-fetch tasks to the app state.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::NewsTick { generation, item } => {
            if app.apply_news_tick(generation, item) {
                app.needs_redraw = true;
            }
        }
        AppEvent::DetailLoaded { title, result } => {
            match &result {
                Ok(text) => tracing::debug!(title = %title, len = text.len(), "Detail loaded"),
                Err(e) => tracing::warn!(title = %title, error = %e, "Detail fetch failed"),
            }
            app.apply_detail(result);
            app.needs_redraw = true;
        }
    }
}
