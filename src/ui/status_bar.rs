use crate::app::state::{RootState, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Key hints for whatever currently owns the keyboard.
pub fn hints(state: &RootState) -> &'static str {
    let goals = &state.life_goals;
    match state.selected_tab {
        Some(Tab::LifeGoals) if goals.is_add_life_goal_sheet_visible => {
            "Tab next field · Enter next/save · Ctrl-S save · Esc cancel"
        }
        Some(Tab::LifeGoals) => "a add · e edit · space done · d delete · f filter · ↑/↓ move",
        Some(Tab::Settings) if state.settings.is_editing() => "Enter save · Esc cancel",
        Some(Tab::Settings) => "↑/↓ move · Enter change · ←/→ theme",
        Some(Tab::LifeCalendar) if state.life_calendar.is_about_the_calendar_sheet_visible => {
            "Esc close"
        }
        Some(Tab::LifeCalendar) => "c switch view · ? about",
        None => "Tab or 1-3 to pick a screen",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &RootState) {
    let life = &state.life_calendar.life;
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", life.today.format("%a %d %b %Y")),
        Style::default()
            .fg(Theme::accent(state.theme()))
            .bg(Color::DarkGray),
    ));

    parts.push(Span::styled(format!(" {} ", hints(state)), Theme::status_bar()));

    let progress = format!(" {}% lived · q quit ", life.formatted_progress());
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + progress.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(progress, Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::memory::TestEnv;
    use crate::config::AppConfig;

    #[test]
    fn test_hints_follow_focus() {
        let t = TestEnv::new();
        let mut state = RootState::new(&t.env, &AppConfig::default());
        assert_eq!(hints(&state), "c switch view · ? about");

        state.selected_tab = Some(Tab::Settings);
        state.settings.birthday.is_date_picker_visible = true;
        assert_eq!(hints(&state), "Enter save · Esc cancel");

        state.selected_tab = None;
        assert_eq!(hints(&state), "Tab or 1-3 to pick a screen");
    }
}
