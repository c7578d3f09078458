use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical split: tab bar | content | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab bar + rule
            Constraint::Min(5),    // Current screen
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        tab_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

/// A popup centred in `area`: a share of its size, at least `min_w`x`min_h`
/// where the terminal allows.
pub fn centered_popup(area: Rect, percent_w: u16, percent_h: u16, min_w: u16, min_h: u16) -> Rect {
    let popup_w = (area.width * percent_w / 100)
        .max(min_w)
        .min(area.width.saturating_sub(2));
    let popup_h = (area.height * percent_h / 100)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}
