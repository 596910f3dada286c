pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use app::{InputMode, Page};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(app.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();

    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Page navigation
            KeyCode::Tab => app.next_page(),
            KeyCode::BackTab => app.previous_page(),
            KeyCode::Char(c @ '1'..='5') => {
                app.goto_page(c as usize - '1' as usize);
            }

            // Home-page slider controls
            KeyCode::Char('j') | KeyCode::Down if app.page == Page::Home => app.next_slider(),
            KeyCode::Char('k') | KeyCode::Up if app.page == Page::Home => app.previous_slider(),
            KeyCode::Char('l') | KeyCode::Right if app.page == Page::Home => {
                app.increase_slider()
            }
            KeyCode::Char('h') | KeyCode::Left if app.page == Page::Home => app.decrease_slider(),
            KeyCode::Enter if app.page == Page::Home => app.predict(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&Config::default());
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(&Config::default());
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_assesses_only_on_home() {
        let mut app = App::new(&Config::default());
        app.page = Page::Dashboard;
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(!app.session.has_prediction());

        app.page = Page::Home;
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.session.has_prediction());
    }

    #[test]
    fn test_digit_jumps_to_page() {
        let mut app = App::new(&Config::default());
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.page, Page::Diet);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = App::new(&Config::default());
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.input_mode, InputMode::Help);

        // Next key only dismisses the overlay, no other effect
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_slider_keys_ignored_off_home() {
        let mut app = App::new(&Config::default());
        app.page = Page::Habits;
        let before = app.values;
        handle_key_event(&mut app, key(KeyCode::Char('l')));
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.values, before);
        assert_eq!(app.focus, 0);
    }
}
