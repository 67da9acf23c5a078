use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Selector screen layout
pub struct AppLayout {
    pub filter_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Stack the screen top to bottom:
    /// - Filter prompt: 3 rows (bordered)
    /// - Session list: everything in between
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter prompt
                Constraint::Min(3),    // Session list (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { filter_area: chunks[0], list_area: chunks[1], status_area: chunks[2] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);

        assert_eq!(layout.filter_area.height, 3);
        assert_eq!(layout.filter_area.y, 0);

        assert_eq!(layout.list_area.y, 3);
        assert_eq!(layout.list_area.height, 26);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        // All panes span the full width
        assert_eq!(layout.list_area.width, 100);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 80, 7);
        let layout = AppLayout::new(area);

        assert_eq!(layout.filter_area.height, 3);
        assert_eq!(layout.list_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
    }
}
