use crate::app::state::RootState;
use crate::features::life_calendar::CalendarType;
use crate::life::{Life, TOTAL_WEEKS_IN_A_YEAR};
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};

const CELL: &str = "■";

pub fn render(frame: &mut Frame, area: Rect, state: &RootState) {
    let calendar = &state.life_calendar;
    let life = &calendar.life;
    let theme = state.theme();

    let block = Block::default()
        .title(format!(" {} ", calendar.calendar_type.title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width < 20 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Summary
            Constraint::Length(1), // Progress
            Constraint::Min(1),    // Grid
        ])
        .split(inner);

    let (summary, ratio, label) = match calendar.calendar_type {
        CalendarType::Life => (
            format!(
                " Age {}  ·  {} weeks spent  ·  {} weeks left",
                life.age(),
                life.number_of_weeks_spent(),
                life.number_of_weeks_left()
            ),
            life.progress(),
            format!("{}%", life.formatted_progress()),
        ),
        CalendarType::CurrentYear => (
            format!(
                " Week {} of {}  ·  {} weeks left this year",
                life.current_year_weeks_spent() + 1,
                TOTAL_WEEKS_IN_A_YEAR,
                life.current_year_remaining_weeks()
            ),
            life.current_year_progress(),
            format!("{}%", life.formatted_current_year_progress()),
        ),
    };
    frame.render_widget(Paragraph::new(summary).style(Theme::text()), chunks[0]);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Theme::accent(theme)))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(label),
        chunks[1],
    );

    let lines = match calendar.calendar_type {
        CalendarType::Life => life_grid(life, chunks[2].height, state),
        CalendarType::CurrentYear => {
            current_year_grid(life, calendar.current_year_mode_column_count, state)
        }
    };
    frame.render_widget(Paragraph::new(lines), chunks[2]);

    if calendar.is_about_the_calendar_sheet_visible {
        render_about_sheet(frame, area, state);
    }
}

/// One row per year of age. Only the rows that fit are drawn, keeping the
/// current year in view.
fn life_grid<'a>(life: &Life, height: u16, state: &RootState) -> Vec<Line<'a>> {
    let theme = state.theme();
    let (start, end) = visible_years(life.life_expectancy, life.age(), height as u32);

    (start..end)
        .map(|year| {
            let mut spans = Vec::with_capacity(TOTAL_WEEKS_IN_A_YEAR as usize + 1);
            if state.show_week_numbers {
                spans.push(Span::styled(format!("{:>4} ", year), Theme::muted()));
            }
            for week in 0..TOTAL_WEEKS_IN_A_YEAR {
                spans.push(Span::styled(CELL, Theme::week(life.week_state(year, week), theme)));
            }
            Line::from(spans)
        })
        .collect()
}

/// The `[start, end)` window of years to draw in `rows` lines.
pub fn visible_years(total: u32, current: u32, rows: u32) -> (u32, u32) {
    if rows >= total {
        return (0, total);
    }
    let start = current.saturating_sub(rows / 2).min(total - rows);
    (start, start + rows)
}

fn current_year_grid<'a>(life: &Life, columns: u16, state: &RootState) -> Vec<Line<'a>> {
    let theme = state.theme();
    let year = life.age();
    let columns = columns.max(1) as u32;

    (0..TOTAL_WEEKS_IN_A_YEAR)
        .collect::<Vec<_>>()
        .chunks(columns as usize)
        .map(|row| {
            let mut spans = Vec::new();
            if state.show_week_numbers {
                spans.push(Span::styled(format!("{:>3} ", row[0] + 1), Theme::muted()));
            }
            for &week in row {
                spans.push(Span::styled("██ ", Theme::week(life.week_state(year, week), theme)));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_about_sheet(frame: &mut Frame, area: Rect, state: &RootState) {
    let about = state.life_calendar.about_the_app();
    let life = about.life;
    let theme = state.theme();
    let popup = centered_popup(area, 60, 60, 50, 14);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" About the Life Calendar (Esc to close) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused(theme))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let accent = Style::default().fg(Theme::accent(theme));
    let text = vec![
        Line::from("Each row is one year of your life. Each square is one week."),
        Line::from(""),
        Line::from(vec![
            Span::styled(CELL, Theme::week(crate::life::WeekState::Spent, theme)),
            Span::raw(" weeks you have lived"),
        ]),
        Line::from(vec![
            Span::styled(CELL, Theme::week(crate::life::WeekState::Current, theme)),
            Span::raw(" this week"),
        ]),
        Line::from(vec![
            Span::styled(CELL, Theme::week(crate::life::WeekState::Left, theme)),
            Span::raw(" weeks still ahead"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Born "),
            Span::styled(life.birthday.format("%B %-d, %Y").to_string(), accent),
            Span::raw(", expecting "),
            Span::styled(life.life_expectancy.to_string(), accent),
            Span::raw(" years: "),
            Span::styled(life.total_weeks().to_string(), accent),
            Span::raw(" weeks in total."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press c or space to switch between the whole life and the current year.",
            Theme::muted(),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}
