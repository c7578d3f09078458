use crate::features::theme::ThemeKind;
use crate::life::WeekState;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(30, 30, 36);

    /// The accent colour for the theme picked in settings.
    pub fn accent(kind: ThemeKind) -> Color {
        match kind {
            ThemeKind::Blue => Color::Rgb(10, 132, 255),
            ThemeKind::Green => Color::Rgb(48, 209, 88),
            ThemeKind::Orange => Color::Rgb(255, 159, 10),
            ThemeKind::Pink => Color::Rgb(255, 55, 95),
            ThemeKind::Purple => Color::Rgb(191, 90, 242),
            ThemeKind::Red => Color::Rgb(255, 69, 58),
            ThemeKind::Teal => Color::Rgb(100, 210, 255),
            ThemeKind::Yellow => Color::Rgb(255, 214, 10),
        }
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused(kind: ThemeKind) -> Style {
        Style::default().fg(Self::accent(kind))
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn highlight(kind: ThemeKind) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::accent(kind))
            .add_modifier(Modifier::BOLD)
    }

    pub fn completed() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn week(state: WeekState, kind: ThemeKind) -> Style {
        match state {
            WeekState::Spent => Style::default().fg(Self::accent(kind)),
            WeekState::Current => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            WeekState::Left => Style::default().fg(Color::DarkGray),
        }
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn tab_active(kind: ThemeKind) -> Style {
        Style::default()
            .fg(Self::accent(kind))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }
}
