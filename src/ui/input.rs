//! Input handling for the TUI.
//!
//! Maps key presses onto app actions. The screen has two focusable controls,
//! the category chips and the action button; Tab moves between them.

use crate::app::{App, AppEvent, Focus};
use crate::news::Category;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::Action;

/// Main input dispatch function.
pub fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Left | KeyCode::Char('h') => {
            app.focus = Focus::Categories;
            app.move_chip_cursor(false);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.focus = Focus::Categories;
            app.move_chip_cursor(true);
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(category) = Category::from_index(index) {
                app.select_category(category, event_tx);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => match app.focus {
            Focus::Categories => {
                app.select_category(app.chip_cursor, event_tx);
            }
            Focus::Button => read(app, event_tx),
        },
        KeyCode::Char('r') => read(app, event_tx),
        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        _ => {}
    }

    Action::Continue
}

/// Trigger the read action, or explain why the button is disabled.
fn read(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    if !app.request_detail(event_tx) {
        app.set_status("Masih mengambil detail…");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(app: &mut App, code: KeyCode, tx: &mpsc::Sender<AppEvent>) -> Action {
        handle_input(app, code, KeyModifiers::NONE, tx)
    }

    #[tokio::test(start_paused = true)]
    async fn quit_keys() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = App::new(&Config::default());
        assert!(matches!(press(&mut app, KeyCode::Char('q'), &tx), Action::Quit));
        assert!(matches!(press(&mut app, KeyCode::Esc, &tx), Action::Quit));
        assert!(matches!(
            handle_input(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL, &tx),
            Action::Quit
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn number_keys_select_category() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('6'), &tx);
        assert_eq!(app.category, Category::Tech);
        press(&mut app, KeyCode::Char('1'), &tx);
        assert_eq!(app.category, Category::All);
    }

    #[tokio::test(start_paused = true)]
    async fn arrows_move_cursor_and_enter_selects() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Right, &tx);
        press(&mut app, KeyCode::Right, &tx);
        assert_eq!(app.focus, Focus::Categories);
        assert_eq!(app.chip_cursor, Category::Nasional);
        assert_eq!(app.category, Category::All);

        press(&mut app, KeyCode::Enter, &tx);
        assert_eq!(app.category, Category::Nasional);
        assert!(app.headline.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn enter_on_button_reads() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = App::new(&Config::default());
        assert_eq!(app.focus, Focus::Button);
        press(&mut app, KeyCode::Enter, &tx);
        assert_eq!(app.read_count(), 1);
        assert_eq!(app.status_label(), "Loading…");
    }

    #[tokio::test(start_paused = true)]
    async fn read_while_loading_shows_status() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('r'), &tx);
        press(&mut app, KeyCode::Char('r'), &tx);
        assert_eq!(app.read_count(), 1);
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Masih mengambil detail…");
    }

    #[tokio::test(start_paused = true)]
    async fn tab_toggles_focus() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab, &tx);
        assert_eq!(app.focus, Focus::Categories);
        press(&mut app, KeyCode::Tab, &tx);
        assert_eq!(app.focus, Focus::Button);
    }
}
