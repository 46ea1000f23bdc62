use std::sync::Arc;

use ratatui::widgets::ListState;

use crate::aggregator::FeedState;
use crate::domain::{Article, CategoryEntry, CategoryFeed, LookupState, SelectionState, SummaryState};
use crate::session::Versioned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Categories,
    Articles,
    Summary,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Categories => ActivePane::Articles,
            ActivePane::Articles => ActivePane::Summary,
            ActivePane::Summary => ActivePane::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActivePane::Categories => ActivePane::Summary,
            ActivePane::Articles => ActivePane::Categories,
            ActivePane::Summary => ActivePane::Articles,
        }
    }
}

pub const PAGE_SIZE: usize = 10;

pub struct TuiApp {
    pub active_pane: ActivePane,
    pub feed: Option<Arc<CategoryFeed>>,
    pub feed_error: Option<String>,
    pub category_index: usize,
    pub article_index: usize,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub is_refreshing: bool,
    // Summary pane
    pub selection: SelectionState,
    pub selection_generation: u64,
    pub learning_mode: bool,
    pub word_index: usize,
    pub lookup: Option<LookupState>,
    // List states for scrolling
    pub category_list_state: ListState,
    pub article_list_state: ListState,
}

impl TuiApp {
    pub fn new() -> Self {
        let mut category_list_state = ListState::default();
        category_list_state.select(Some(0));
        let mut article_list_state = ListState::default();
        article_list_state.select(Some(0));

        Self {
            active_pane: ActivePane::Categories,
            feed: None,
            feed_error: None,
            category_index: 0,
            article_index: 0,
            should_quit: false,
            status_message: None,
            is_refreshing: false,
            selection: SelectionState::NoSelection,
            selection_generation: 0,
            learning_mode: false,
            word_index: 0,
            lookup: None,
            category_list_state,
            article_list_state,
        }
    }

    pub fn apply_feed_state(&mut self, state: FeedState) {
        match state {
            FeedState::Loading => {}
            FeedState::Ready(feed) => {
                self.feed = Some(feed);
                self.feed_error = None;
                self.clamp_indices();
            }
            FeedState::Failed(message) => {
                self.feed_error = Some(message);
            }
        }
    }

    pub fn apply_selection(&mut self, snapshot: Versioned<SelectionState>) {
        if snapshot.generation != self.selection_generation {
            self.selection_generation = snapshot.generation;
            self.word_index = 0;
        }
        self.selection = snapshot.state;
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        self.feed.as_deref().map(|f| f.entries()).unwrap_or(&[])
    }

    pub fn selected_category(&self) -> Option<&CategoryEntry> {
        self.categories().get(self.category_index)
    }

    pub fn articles(&self) -> &[Article] {
        self.selected_category()
            .map(|c| c.articles.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles().get(self.article_index)
    }

    /// Words of the loaded summary, in reading order.
    pub fn summary_words(&self) -> Vec<&str> {
        match self.selection.summary() {
            Some(SummaryState::Success(text)) => text.split_whitespace().collect(),
            _ => Vec::new(),
        }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.summary_words().get(self.word_index).copied()
    }

    pub fn move_up(&mut self) {
        self.move_by(-1);
    }

    pub fn move_down(&mut self) {
        self.move_by(1);
    }

    pub fn next_page(&mut self) {
        self.move_by(PAGE_SIZE as isize);
    }

    pub fn prev_page(&mut self) {
        self.move_by(-(PAGE_SIZE as isize));
    }

    fn move_by(&mut self, delta: isize) {
        match self.active_pane {
            ActivePane::Categories => {
                let len = self.categories().len();
                let new_index = step(self.category_index, delta, len);
                if new_index != self.category_index {
                    self.category_index = new_index;
                    self.category_list_state.select(Some(new_index));
                    self.article_index = 0;
                    self.article_list_state.select(Some(0));
                }
            }
            ActivePane::Articles => {
                let len = self.articles().len();
                self.article_index = step(self.article_index, delta, len);
                self.article_list_state.select(Some(self.article_index));
            }
            ActivePane::Summary => {
                if self.learning_mode {
                    let len = self.summary_words().len();
                    self.word_index = step(self.word_index, delta, len);
                }
            }
        }
    }

    pub fn toggle_learning(&mut self) {
        self.learning_mode = !self.learning_mode;
        if self.learning_mode {
            self.active_pane = ActivePane::Summary;
            self.word_index = self.word_index.min(self.summary_words().len().saturating_sub(1));
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn clamp_indices(&mut self) {
        let categories = self.categories().len();
        if self.category_index >= categories {
            self.category_index = categories.saturating_sub(1);
        }
        self.category_list_state.select(Some(self.category_index));

        let articles = self.articles().len();
        if self.article_index >= articles {
            self.article_index = articles.saturating_sub(1);
        }
        self.article_list_state.select(Some(self.article_index));
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}
