//! Session selector state and event handling.
//!
//! The selector is a small state machine over the ranked session list:
//!
//! - **Browsing** (initial): move the cursor, `/` starts filtering, `Enter` confirms,
//!   `q`/`Esc` cancel when no filter is applied
//! - **Filtering**: typed characters edit the filter, `Esc` clears it and goes back to
//!   browsing, `Enter` confirms the highlighted item
//! - **Confirmed** / **Cancelled**: terminal, reported as a [`Selection`]
//!
//! Filtering runs `nucleo`'s fuzzy matcher synchronously on the event-loop thread over
//! each item's filter key. Matches are ordered by score, ties keep ranked order.
//!
//! Rendering is kept out of this module: [`App::run`] hands the visible items and the
//! cursor to [`render_ui`] and feeds key actions back into [`App::handle_action`].

use std::time::{Duration, Instant};

use anyhow::Result;
use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::item::SelectableItem;
use super::rendering::{RenderState, render_ui};

/// Longest filter accepted, in characters
const MAX_FILTER_CHARS: usize = 100;

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;

/// Interaction mode while the selector is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Filtering,
}

/// How the selector ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user confirmed this session id
    Chosen(String),
    /// The user left without choosing
    Cancelled,
    /// There was nothing to choose from
    Empty,
}

pub struct App {
    items: Vec<SelectableItem>,
    /// Indices into `items`, in display order
    visible: Vec<usize>,
    filter: String,
    mode: Mode,
    selected_idx: usize,
    outcome: Option<Selection>,
    matcher: Matcher,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(items: Vec<SelectableItem>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            visible,
            filter: String::new(),
            mode: Mode::Browsing,
            selected_idx: 0,
            outcome: None,
            matcher: Matcher::new(Config::DEFAULT),
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    pub fn outcome(&self) -> Option<&Selection> {
        self.outcome.as_ref()
    }

    /// Items that pass the current filter, in display order
    pub fn visible_items(&self) -> Vec<&SelectableItem> {
        self.visible.iter().map(|&idx| &self.items[idx]).collect()
    }

    /// The highlighted item, if any item is visible
    pub fn selected_item(&self) -> Option<&SelectableItem> {
        self.visible.get(self.selected_idx).map(|&idx| &self.items[idx])
    }

    /// Run the event loop until the user confirms or cancels
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Selection> {
        if self.items.is_empty() {
            return Ok(Selection::Empty);
        }

        loop {
            if let Some(outcome) = self.outcome.take() {
                return Ok(outcome);
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100) {
                let visible = self.visible_items();
                let state = RenderState {
                    filter: &self.filter,
                    mode: self.mode,
                    visible_count: visible.len(),
                    total_count: self.items.len(),
                };
                terminal.draw(|f| render_ui(f, &visible, self.selected_idx, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100), self.mode)?;
            self.handle_action(action);
        }
    }

    /// Apply one user action to the state machine
    pub fn handle_action(&mut self, action: Action) {
        if self.outcome.is_some() {
            return;
        }

        match action {
            Action::Cancel => self.finish(Selection::Cancelled),
            Action::QuitIfUnfiltered => {
                if self.filter.is_empty() {
                    self.finish(Selection::Cancelled);
                }
            }
            Action::Back => match self.mode {
                Mode::Filtering => {
                    self.clear_filter();
                    self.mode = Mode::Browsing;
                }
                Mode::Browsing if !self.filter.is_empty() => self.clear_filter(),
                Mode::Browsing => self.finish(Selection::Cancelled),
            },
            Action::Confirm => {
                if let Some(item) = self.selected_item() {
                    let chosen = Selection::Chosen(item.session_id().to_string());
                    self.finish(chosen);
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::Top => self.move_selection(isize::MIN / 2),
            Action::Bottom => self.move_selection(isize::MAX / 2),
            Action::StartFilter => {
                self.mode = Mode::Filtering;
                self.needs_redraw = true;
            }
            Action::UpdateFilter(c) => self.update_filter(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    fn finish(&mut self, selection: Selection) {
        self.outcome = Some(selection);
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize).saturating_add(delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn update_filter(&mut self, c: char) {
        if self.filter.chars().count() < MAX_FILTER_CHARS {
            self.filter.push(c);
            self.refilter();
        }
    }

    fn delete_char(&mut self) {
        if self.filter.pop().is_some() {
            self.refilter();
        } else {
            self.mode = Mode::Browsing;
            self.needs_redraw = true;
        }
    }

    fn clear_filter(&mut self) {
        if !self.filter.is_empty() {
            self.filter.clear();
            self.refilter();
        }
        self.needs_redraw = true;
    }

    /// Recompute visible items for the current filter and reset the cursor
    fn refilter(&mut self) {
        if self.filter.is_empty() {
            self.visible = (0..self.items.len()).collect();
        } else {
            let pattern = Pattern::parse(&self.filter, CaseMatching::Smart, Normalization::Smart);
            let mut buf = Vec::new();
            let mut scored: Vec<(usize, u32)> = self
                .items
                .iter()
                .enumerate()
                .filter_map(|(idx, item)| {
                    let haystack = Utf32Str::new(item.filter_key(), &mut buf);
                    pattern.score(haystack, &mut self.matcher).map(|score| (idx, score))
                })
                .collect();
            // Stable: equal scores keep ranked order
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.visible = scored.into_iter().map(|(idx, _)| idx).collect();
        }

        self.selected_idx = 0;
        self.needs_redraw = true;
    }
}
