use crate::app::state::RootState;
use crate::features::add_or_edit_life_goal::{AddOrEditLifeGoalState, GoalEditorMode, GoalField};
use crate::features::symbol_picker::SYMBOLS;
use crate::features::text_field::TextField;
use crate::ui::layout::centered_popup;
use crate::ui::symbols::glyph;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, area: Rect, state: &RootState) {
    let goals = &state.life_goals;
    let theme = state.theme();

    let block = Block::default()
        .title(format!(
            " Life Goals · {} · {}/{} done ",
            goals.filter.title(),
            goals.completed_count(),
            goals.goals.len()
        ))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused(theme));

    let visible = goals.visible_goals();
    if visible.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("  No goals here yet.", Theme::muted())),
            Line::from(Span::styled("  Press a to add one.", Theme::muted())),
        ])
        .block(block);
        frame.render_widget(hint, area);
    } else {
        let width = area.width.saturating_sub(10) as usize;
        let items: Vec<ListItem> = visible
            .iter()
            .map(|goal| {
                let (mark, style) = if goal.is_completed() {
                    ("✔", Theme::completed())
                } else {
                    ("○", Theme::text())
                };
                let mut lines = vec![Line::from(vec![
                    Span::styled(format!(" {} ", mark), style),
                    Span::styled(format!("{} ", glyph(&goal.symbol_name)), Style::default().fg(Theme::accent(theme))),
                    Span::styled(truncate(&goal.title, width), style),
                ])];
                if !goal.details.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("     {}", truncate(&goal.details, width)),
                        Theme::muted(),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let mut list_state = ListState::default().with_selected(Some(goals.selected));
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Theme::BG_SURFACE).add_modifier(Modifier::BOLD))
            .highlight_symbol("▌");
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    if goals.is_add_life_goal_sheet_visible {
        if let Some(form) = &goals.add_or_edit_life_goal {
            render_editor(frame, area, form, state);
        }
    }
}

/// Cut `text` to at most `max` terminal columns, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn render_editor(frame: &mut Frame, area: Rect, form: &AddOrEditLifeGoalState, state: &RootState) {
    let theme = state.theme();
    let popup = centered_popup(area, 60, 50, 44, 12);
    frame.render_widget(Clear, popup);

    let title = match form.mode {
        GoalEditorMode::Add => " New Goal (Ctrl-S save · Esc cancel) ",
        GoalEditorMode::Edit(_) => " Edit Goal (Ctrl-S save · Esc cancel) ",
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused(theme))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Details
            Constraint::Length(3), // Symbol
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(frame, rows[0], "Title", &form.title, form.focus == GoalField::Title, state);
    render_field(frame, rows[1], "Details", &form.details, form.focus == GoalField::Details, state);

    let focused = form.focus == GoalField::Symbol;
    let symbol = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", glyph(&form.symbol_picker.symbol_name)),
            Style::default().fg(Theme::accent(theme)),
        ),
        Span::styled(form.symbol_picker.symbol_name.as_str(), Theme::text()),
        Span::styled("   Enter to choose", Theme::muted()),
    ]))
    .block(field_block("Symbol", focused, state));
    frame.render_widget(symbol, rows[2]);

    if form.symbol_picker.is_sheet_visible {
        render_symbol_picker(frame, popup, form, state);
    }
}

fn field_block<'a>(label: &'a str, focused: bool, state: &RootState) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused(state.theme())
        } else {
            Theme::border()
        })
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &TextField,
    focused: bool,
    state: &RootState,
) {
    let block = field_block(label, focused, state);
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(field.text.as_str()).style(Theme::text()).block(block), area);

    if focused && inner.width > 0 {
        let before: usize = field.text[..field.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        let cursor_x = inner.x + before as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

fn render_symbol_picker(frame: &mut Frame, area: Rect, form: &AddOrEditLifeGoalState, state: &RootState) {
    let theme = state.theme();
    let popup = centered_popup(area, 70, 70, 36, 8);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = SYMBOLS
        .iter()
        .map(|name| {
            let current = *name == form.symbol_picker.symbol_name;
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", glyph(name)), Style::default().fg(Theme::accent(theme))),
                Span::styled(*name, Theme::text()),
                Span::styled(if current { "  (current)" } else { "" }, Theme::muted()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(form.symbol_picker.highlighted));
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Symbol (Enter pick · Esc close) ")
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Theme::border_focused(theme))
                .style(Style::default().bg(Theme::BG_SURFACE)),
        )
        .highlight_style(Theme::highlight(theme));
    frame.render_stateful_widget(list, popup, &mut list_state);
}
