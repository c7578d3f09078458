mod calendar;
mod goals;
mod layout;
mod onboarding;
mod settings;
mod status_bar;
mod symbols;
mod tab_bar;
mod theme;

use crate::app::state::{RootState, Tab};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, state: &RootState) {
    if !state.did_complete_onboarding {
        onboarding::render(frame, state);
        return;
    }

    let app_layout = layout::compute_layout(frame.area());

    tab_bar::render(frame, app_layout.tab_bar, state);
    match state.selected_tab {
        Some(Tab::LifeCalendar) => calendar::render(frame, app_layout.content, state),
        Some(Tab::LifeGoals) => goals::render(frame, app_layout.content, state),
        Some(Tab::Settings) => settings::render(frame, app_layout.content, state),
        None => render_placeholder(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

/// Shown when the selected index names no tab.
fn render_placeholder(frame: &mut Frame, area: Rect, state: &RootState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme::Theme::border_type())
        .border_style(theme::Theme::border());
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Nothing at tab {}.", state.selected_tab_index + 1),
            theme::Theme::title(),
        )),
        Line::from(Span::styled(
            "Press Tab or 1-3 to pick a screen.",
            theme::Theme::muted(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::memory::TestEnv;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn screen(state: &RootState) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn onboarded() -> RootState {
        let t = TestEnv::new();
        let mut state = RootState::new(&t.env, &AppConfig::default());
        state.did_complete_onboarding = true;
        state
    }

    #[test]
    fn test_onboarding_screen_before_completion() {
        let t = TestEnv::new();
        let state = RootState::new(&t.env, &AppConfig::default());
        assert!(screen(&state).contains("Welcome to lifegrid"));
    }

    #[test]
    fn test_each_tab_renders() {
        let mut state = onboarded();
        assert!(screen(&state).contains("Life Calendar"));

        state.selected_tab = Some(Tab::LifeGoals);
        assert!(screen(&state).contains("No goals here yet."));

        state.selected_tab = Some(Tab::Settings);
        assert!(screen(&state).contains("Life Expectancy"));
    }

    #[test]
    fn test_out_of_range_tab_shows_placeholder() {
        let mut state = onboarded();
        state.selected_tab = None;
        state.selected_tab_index = 6;
        assert!(screen(&state).contains("Nothing at tab 7."));
    }
}
