use crate::app::state::RootState;
use crate::features::life_expectancy::{MAX_LIFE_EXPECTANCY, MIN_LIFE_EXPECTANCY};
use crate::features::settings::SettingsRow;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &RootState) {
    let settings = &state.settings;
    let theme = state.theme();

    let block = Block::default()
        .title(" Settings ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Birthday
            Constraint::Length(2), // Life expectancy
            Constraint::Length(2), // Theme
            Constraint::Length(2), // Weekly notification
            Constraint::Length(2), // Slider
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, row) in SettingsRow::ALL.into_iter().enumerate() {
        let selected = settings.selected_row == row;
        let value = match row {
            SettingsRow::Birthday => {
                let date = settings.birthday.birthday.format("%Y-%m-%d").to_string();
                if settings.birthday.is_date_picker_visible {
                    format!("◀ {} ▶   ←/→ day  ↑/↓ month  PgUp/PgDn year  Enter save", date)
                } else {
                    date
                }
            }
            SettingsRow::LifeExpectancy => {
                format!("{} years", settings.life_expectancy.life_expectancy)
            }
            SettingsRow::Theme => format!("◀ {} ▶", settings.theme.selected_theme.title()),
            SettingsRow::WeeklyNotification => {
                if settings.weekly_notification.is_weekly_notification_enabled {
                    "On".to_string()
                } else {
                    "Off".to_string()
                }
            }
        };

        let label_style = if selected {
            Theme::highlight(theme)
        } else {
            Theme::text()
        };
        let value_style = match row {
            SettingsRow::Theme => Style::default().fg(Theme::accent(settings.theme.selected_theme)),
            _ => Theme::text(),
        };
        let line = Line::from(vec![
            Span::styled(format!(" {:<22}", row.title()), label_style),
            Span::raw("  "),
            Span::styled(value, value_style),
        ]);
        frame.render_widget(Paragraph::new(line), rows[i]);
    }

    if settings.life_expectancy.is_slider_visible {
        let years = settings.life_expectancy.life_expectancy;
        let ratio = years.saturating_sub(MIN_LIFE_EXPECTANCY) as f64
            / (MAX_LIFE_EXPECTANCY - MIN_LIFE_EXPECTANCY) as f64;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Theme::accent(theme)))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{} years  (←/→ ±1  ↑/↓ ±5  Enter save  Esc cancel)", years));
        frame.render_widget(gauge, rows[4]);
    }
}
