use crate::registry::Registry;
use crate::types::Animal;

/// Application state
pub struct App {
    pub registry: Registry,
    pub cursor_position: usize,
    pub scroll_offset: usize,
    pub height: usize,

    // Search
    pub search_mode: bool,
    pub search_query: String,
    pub search_results: Vec<usize>,
    pub search_index: usize,
}

impl App {
    /// Create a new app browsing the given registry
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            cursor_position: 0,
            scroll_offset: 0,
            height: 0,
            search_mode: false,
            search_query: String::new(),
            search_results: Vec::new(),
            search_index: 0,
        }
    }

    /// The animal under the cursor, if any
    pub fn selected(&self) -> Option<&Animal> {
        self.registry.get(self.cursor_position)
    }

    /// Move cursor to the next animal
    pub fn next(&mut self) {
        if self.cursor_position + 1 < self.registry.len() {
            self.cursor_position += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor to the previous animal
    pub fn previous(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.adjust_scroll();
        }
    }

    /// Enter search mode
    pub fn enter_search(&mut self) {
        self.search_mode = true;
        self.search_query.clear();
        self.search_results.clear();
        self.search_index = 0;
    }

    /// Exit search mode
    pub fn exit_search(&mut self) {
        self.search_mode = false;
    }

    /// Add character to search query
    pub fn add_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.update_search();
    }

    /// Remove character from search query
    pub fn remove_search_char(&mut self) {
        self.search_query.pop();
        self.update_search();
    }

    /// Recompute matches and jump to the first one
    fn update_search(&mut self) {
        self.search_results.clear();
        self.search_index = 0;

        if self.search_query.is_empty() {
            return;
        }

        let query = self.search_query.to_lowercase();
        for (i, animal) in self.registry.all().iter().enumerate() {
            if animal.name().to_lowercase().contains(&query)
                || animal.kind().as_str().to_lowercase().contains(&query)
            {
                self.search_results.push(i);
            }
        }

        if let Some(&first) = self.search_results.first() {
            self.cursor_position = first;
            self.adjust_scroll();
        }
    }

    /// Navigate to the next search result
    pub fn next_search_result(&mut self) {
        if self.search_results.is_empty() {
            return;
        }

        self.search_index = (self.search_index + 1) % self.search_results.len();
        self.cursor_position = self.search_results[self.search_index];
        self.adjust_scroll();
    }

    /// Navigate to the previous search result
    pub fn prev_search_result(&mut self) {
        if self.search_results.is_empty() {
            return;
        }

        self.search_index = if self.search_index == 0 {
            self.search_results.len() - 1
        } else {
            self.search_index - 1
        };
        self.cursor_position = self.search_results[self.search_index];
        self.adjust_scroll();
    }

    /// Adjust scroll to keep cursor in view
    fn adjust_scroll(&mut self) {
        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
        } else if self.height > 0 && self.cursor_position >= self.scroll_offset + self.height {
            self.scroll_offset = self.cursor_position + 1 - self.height;
        }
    }

    /// Set the UI height for scrolling calculations
    pub fn set_ui_height(&mut self, height: usize) {
        self.height = height;
        self.adjust_scroll();
    }

    /// Detail lines for the selected animal
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let Some(animal) = self.selected() else {
            return Vec::new();
        };

        let mut lines = vec![
            ("", animal.label()),
            ("Extra", animal.extra()),
            ("Speaks", animal.speak().to_string()),
            ("Moves", animal.moves().to_string()),
        ];
        if let Some(flyer) = animal.as_flyer() {
            lines.push(("Flies", flyer.fly()));
        }
        lines
    }
}
