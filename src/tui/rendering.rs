use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::app::Mode;
use super::item::SelectableItem;
use super::layout::AppLayout;

const LIST_TITLE: &str = " Claude Code Sessions ";
const FILTER_PROMPT: &str = "🔍 Filter: ";
const FILTER_PLACEHOLDER: &str = "Type to filter...";

const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Selector state the renderer needs besides the visible items
pub struct RenderState<'a> {
    pub filter: &'a str,
    pub mode: Mode,
    pub visible_count: usize,
    pub total_count: usize,
}

/// Render the entire UI
pub fn render_ui(
    frame: &mut Frame,
    items: &[&SelectableItem],
    selected_idx: usize,
    state: &RenderState,
) {
    let layout = AppLayout::new(frame.area());

    render_filter(frame, layout.filter_area, state);
    render_list(frame, layout.list_area, items, selected_idx);
    render_status_bar(frame, layout.status_area, selected_idx, state);
}

fn render_filter(frame: &mut Frame, area: Rect, state: &RenderState) {
    let filtering = state.mode == Mode::Filtering;

    let input = if state.filter.is_empty() && !filtering {
        Span::styled(FILTER_PLACEHOLDER, Style::default().fg(MUTED))
    } else if filtering {
        Span::styled(format!("{}▏", state.filter), Style::default().fg(BRIGHT))
    } else {
        Span::styled(state.filter.to_string(), Style::default().fg(BRIGHT))
    };

    let border = if filtering { ACCENT } else { MUTED };
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(FILTER_PROMPT, Style::default().fg(ACCENT)),
        input,
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)));

    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame, area: Rect, items: &[&SelectableItem], selected_idx: usize) {
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(Text::from(vec![
                Line::from(item.title().to_string()),
                Line::styled(item.description().to_string(), Style::default().fg(MUTED)),
            ]))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(LIST_TITLE),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    // ListState keeps the highlighted row scrolled into view
    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(selected_idx.min(items.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn status_text(selected_idx: usize, state: &RenderState) -> String {
    let mut parts = vec![];

    if state.visible_count == 0 {
        parts.push("No matching sessions".to_string());
    } else if state.visible_count < state.total_count {
        parts.push(format!("{}/{} sessions", state.visible_count, state.total_count));
    } else {
        parts.push(format!("{} sessions", state.total_count));
    }

    if state.visible_count > 0 {
        parts.push(format!("session {}/{}", selected_idx + 1, state.visible_count));
    }

    match state.mode {
        Mode::Filtering => {
            parts.push("Enter: resume".to_string());
            parts.push("Esc: clear filter".to_string());
        }
        Mode::Browsing => {
            parts.push("/: filter".to_string());
            parts.push("Enter: resume".to_string());
            if state.filter.is_empty() {
                parts.push("q: quit".to_string());
            } else {
                parts.push("Esc: clear filter".to_string());
            }
        }
    }
    parts.push("Ctrl+C: quit".to_string());

    format!(" {} ", parts.join(" | "))
}

fn render_status_bar(frame: &mut Frame, area: Rect, selected_idx: usize, state: &RenderState) {
    let paragraph = Paragraph::new(status_text(selected_idx, state))
        .style(Style::default().fg(BRIGHT).bg(STATUS_BG));

    frame.render_widget(paragraph, area);
}
