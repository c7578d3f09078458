use crate::app::state::{RootState, Tab};
use crate::ui::symbols::glyph;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &RootState) {
    let theme = state.theme();
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for tab in Tab::ALL {
        let selected = state.selected_tab == Some(tab);
        let style = if selected {
            Theme::tab_active(theme)
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(
            format!("{} {} {}", tab.ordinal() + 1, glyph(tab.icon()), tab.title()),
            style,
        ));
        spans.push(Span::styled("   ", Theme::muted()));
    }

    // Depth marker when a tab was pushed onto the path
    if !state.path.is_empty() {
        spans.push(Span::styled(
            format!("› {}", state.path.iter().map(|t| t.title()).collect::<Vec<_>>().join(" › ")),
            Theme::muted(),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM).border_style(Theme::border()));
    frame.render_widget(paragraph, area);
}
