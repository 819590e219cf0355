use alembic_catalog::{Browser, FieldFilter, Item};
use alembic_potterdb::{load_potions, PotterDbClient};
use tokio::sync::oneshot;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browse,
    Search,
    SelectDifficulty,
    SelectCharacteristic,
    Detail,
}

pub struct BrowseApp {
    pub mode: AppMode,
    pub should_quit: bool,
    pub browser: Browser,
    pub endpoint: String,
    pub loading: bool,
    pub items_rx: Option<oneshot::Receiver<Vec<Item>>>,
    /// Highlighted row on the current page.
    pub selected_row: usize,
    /// Byte offset into the search text.
    pub cursor_pos: usize,

    // Popup state
    pub popup_options: Vec<FieldFilter>,
    pub popup_selected: usize,
}

impl BrowseApp {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            mode: AppMode::Browse,
            should_quit: false,
            browser: Browser::new(),
            endpoint: endpoint.into(),
            loading: false,
            items_rx: None,
            selected_row: 0,
            cursor_pos: 0,
            popup_options: Vec::new(),
            popup_selected: 0,
        }
    }

    /// Spawns the one catalog fetch of this session.
    pub fn start_loading(&mut self, client: PotterDbClient) {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let items = load_potions(&client).await;
            let _ = tx.send(items);
        });

        self.items_rx = Some(rx);
        self.loading = true;
    }

    pub fn poll_items(&mut self) {
        if let Some(ref mut rx) = self.items_rx {
            match rx.try_recv() {
                Ok(items) => self.finish_loading(items),
                Err(oneshot::error::TryRecvError::Empty) => {
                    // Still waiting
                }
                Err(oneshot::error::TryRecvError::Closed) => {
                    error!("Fetch task ended without a result");
                    self.finish_loading(Vec::new());
                }
            }
        }
    }

    pub fn finish_loading(&mut self, items: Vec<Item>) {
        info!(count = items.len(), "Catalog ready");
        self.browser.set_items(items);
        self.items_rx = None;
        self.loading = false;
        self.selected_row = 0;
    }

    pub fn search_text(&self) -> &str {
        &self.browser.criteria().search
    }

    fn update_search(&mut self, search: String) {
        self.browser.set_search(search);
        self.selected_row = 0;
    }

    pub fn start_search(&mut self) {
        self.cursor_pos = self.search_text().len();
        self.mode = AppMode::Search;
    }

    pub fn finish_search(&mut self) {
        self.mode = AppMode::Browse;
    }

    pub fn input_char(&mut self, c: char) {
        let mut search = self.search_text().to_string();
        search.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        self.update_search(search);
    }

    pub fn input_backspace(&mut self) {
        if self.cursor_pos > 0 {
            let mut search = self.search_text().to_string();
            let prev_char_boundary = search[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            search.remove(prev_char_boundary);
            self.cursor_pos = prev_char_boundary;
            self.update_search(search);
        }
    }

    pub fn input_delete(&mut self) {
        if self.cursor_pos < self.search_text().len() {
            let mut search = self.search_text().to_string();
            search.remove(self.cursor_pos);
            self.update_search(search);
        }
    }

    pub fn input_clear(&mut self) {
        self.cursor_pos = 0;
        self.update_search(String::new());
    }

    pub fn input_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.search_text()[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn input_right(&mut self) {
        let search = self.search_text();
        if self.cursor_pos < search.len() {
            self.cursor_pos = search[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(search.len());
        }
    }

    pub fn input_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn input_end(&mut self) {
        self.cursor_pos = self.search_text().len();
    }

    /// Display width of the search text left of the cursor.
    pub fn cursor_column(&self) -> usize {
        self.search_text()[..self.cursor_pos].chars().count()
    }

    pub fn row_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn row_down(&mut self) {
        let rows = self.browser.current_page().len();
        if self.selected_row + 1 < rows {
            self.selected_row += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.browser.previous_page() {
            self.selected_row = 0;
        }
    }

    pub fn next_page(&mut self) {
        if self.browser.next_page() {
            self.selected_row = 0;
        }
    }

    /// Presses the `index`-th page-jump button; disabled buttons do nothing.
    pub fn press_page_button(&mut self, index: usize) {
        let Some(button) = self.browser.page_buttons().get(index).copied() else {
            return;
        };
        if button.enabled && self.browser.jump_to_page(button.page) {
            self.selected_row = 0;
        }
    }

    pub fn open_detail(&mut self) {
        if self.browser.select(self.selected_row) {
            self.mode = AppMode::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.browser.close_detail();
        self.mode = AppMode::Browse;
    }

    pub fn open_difficulty_picker(&mut self) {
        self.popup_options = self.browser.difficulty_options();
        self.popup_selected = self
            .popup_options
            .iter()
            .position(|o| *o == self.browser.criteria().difficulty)
            .unwrap_or(0);
        self.mode = AppMode::SelectDifficulty;
    }

    pub fn open_characteristic_picker(&mut self) {
        self.popup_options = self.browser.characteristic_options();
        self.popup_selected = self
            .popup_options
            .iter()
            .position(|o| *o == self.browser.criteria().characteristic)
            .unwrap_or(0);
        self.mode = AppMode::SelectCharacteristic;
    }

    pub fn close_popup(&mut self) {
        self.popup_options.clear();
        self.mode = AppMode::Browse;
    }

    pub fn popup_up(&mut self) {
        if self.popup_selected > 0 {
            self.popup_selected -= 1;
        }
    }

    pub fn popup_down(&mut self) {
        if self.popup_selected + 1 < self.popup_options.len() {
            self.popup_selected += 1;
        }
    }

    pub fn popup_select(&mut self) {
        if let Some(choice) = self.popup_options.get(self.popup_selected).cloned() {
            match self.mode {
                AppMode::SelectDifficulty => self.browser.set_difficulty(choice),
                AppMode::SelectCharacteristic => self.browser.set_characteristic(choice),
                _ => {}
            }
            self.selected_row = 0;
        }
        self.close_popup();
    }
}
