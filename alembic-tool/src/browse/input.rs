use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{AppMode, BrowseApp};

pub fn handle_event(app: &mut BrowseApp, event: Event) {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            handle_key(app, key);
        }
    }
}

fn handle_key(app: &mut BrowseApp, key: KeyEvent) {
    match app.mode {
        AppMode::Browse => handle_browse_key(app, key),
        AppMode::Search => handle_search_key(app, key),
        AppMode::Detail => handle_detail_key(app, key),
        AppMode::SelectDifficulty | AppMode::SelectCharacteristic => handle_popup_key(app, key),
    }
}

fn handle_browse_key(app: &mut BrowseApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('/') => {
            app.start_search();
        }
        KeyCode::Char('d') => {
            app.open_difficulty_picker();
        }
        KeyCode::Char('c') => {
            app.open_characteristic_picker();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.row_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.row_down();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_page();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_page();
        }
        KeyCode::Char(c @ '1'..='3') => {
            app.press_page_button(c as usize - '1' as usize);
        }
        KeyCode::Enter => {
            app.open_detail();
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut BrowseApp, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down, _) => {
            app.finish_search();
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            app.input_clear();
        }
        (KeyCode::Backspace, _) => {
            app.input_backspace();
        }
        (KeyCode::Delete, _) => {
            app.input_delete();
        }
        (KeyCode::Left, _) => {
            app.input_left();
        }
        (KeyCode::Right, _) => {
            app.input_right();
        }
        (KeyCode::Home, _) => {
            app.input_home();
        }
        (KeyCode::End, _) => {
            app.input_end();
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            app.input_char(c);
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut BrowseApp, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
        app.close_detail();
    }
}

fn handle_popup_key(app: &mut BrowseApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_popup(),
        KeyCode::Enter => app.popup_select(),
        KeyCode::Up | KeyCode::Char('k') => app.popup_up(),
        KeyCode::Down | KeyCode::Char('j') => app.popup_down(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alembic_catalog::Item;

    fn press(app: &mut BrowseApp, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn app_with(count: usize) -> BrowseApp {
        let mut app = BrowseApp::new("http://localhost/v1");
        app.finish_loading(
            (1..=count)
                .map(|n| Item::named(format!("id-{n}"), format!("Draught {n}")))
                .collect(),
        );
        app
    }

    #[test]
    fn quit_from_browse() {
        let mut app = app_with(3);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn q_in_search_is_text() {
        let mut app = app_with(3);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, AppMode::Search);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.search_text(), "q");

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        );
        assert_eq!(app.search_text(), "");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Browse);
        assert!(!app.should_quit);
    }

    #[test]
    fn arrows_page_and_enter_opens_modal() {
        let mut app = app_with(25);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.browser.page(), 3);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.browser.page(), 2);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.browser.page(), 2);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.browser.page(), 3);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Detail);
        assert_eq!(app.browser.detail().selected().unwrap().id, "id-22");

        // q closes the modal rather than quitting
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, AppMode::Browse);
        assert!(!app.should_quit);
    }

    #[test]
    fn popup_escape_keeps_filter() {
        let mut app = app_with(3);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.mode, AppMode::SelectCharacteristic);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.browser.filtered().len(), 3);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app_with(3);
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key));
        assert!(!app.should_quit);
    }
}
