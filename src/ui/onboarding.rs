use crate::app::state::RootState;
use crate::features::onboarding::{OnboardingStep, ABOUTS};
use crate::ui::layout::centered_popup;
use crate::ui::symbols::glyph;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &RootState) {
    let onboarding = &state.onboarding;
    let theme = state.theme();
    let accent = Style::default().fg(Theme::accent(theme));
    let area = centered_popup(frame.area(), 60, 60, 50, 16);

    let progress: String = OnboardingStep::ALL
        .iter()
        .map(|step| if *step == onboarding.step { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![Line::from(Span::styled(progress, accent)), Line::from("")];

    match onboarding.step {
        OnboardingStep::About => {
            lines.push(Line::from(Span::styled("Welcome to lifegrid", Theme::title())));
            lines.push(Line::from(""));
            for about in ABOUTS {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", glyph(about.symbol_name)), accent),
                    Span::styled(about.title, Theme::title()),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", about.description),
                    Theme::muted(),
                )));
            }
        }
        OnboardingStep::Birthday => {
            lines.push(Line::from(Span::styled("When is your birthday?", Theme::title())));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("◀ "),
                Span::styled(
                    onboarding.birthday.birthday.format("%B %-d, %Y").to_string(),
                    accent.add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ▶"),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "←/→ day   ↑/↓ month   PgUp/PgDn year",
                Theme::muted(),
            )));
        }
        OnboardingStep::LifeExpectancy => {
            lines.push(Line::from(Span::styled(
                "How many years do you expect to live?",
                Theme::title(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{} years", onboarding.life_expectancy.life_expectancy),
                accent.add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("←/→ ±1   ↑/↓ ±5", Theme::muted())));
        }
    }

    lines.push(Line::from(""));
    let cta = match onboarding.step {
        OnboardingStep::LifeExpectancy => "Enter to start   Esc back",
        OnboardingStep::Birthday => "Enter to continue   Esc back",
        OnboardingStep::About => "Enter to continue   q quit",
    };
    lines.push(Line::from(Span::styled(cta, Theme::muted())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused(theme));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
