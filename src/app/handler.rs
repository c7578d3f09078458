//! Translates terminal input and ticks into actions for the store.
//!
//! The handler never mutates state; it reads the current screen and decides
//! what to send.

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::reducer::{on_appear, on_disappear};
use crate::app::state::{RootState, Tab};
use crate::features::add_or_edit_life_goal::{AddOrEditLifeGoalAction, AddOrEditLifeGoalState, GoalField};
use crate::features::birthday::{adjust, BirthdayAction, DateStep};
use crate::features::life_calendar::LifeCalendarAction;
use crate::features::about_the_app::AboutTheAppAction;
use crate::features::life_expectancy::{LifeExpectancyAction, LifeExpectancyState};
use crate::features::life_goals::LifeGoalsAction;
use crate::features::onboarding::{OnboardingAction, OnboardingStep};
use crate::features::settings::{SettingsAction, SettingsRow};
use crate::features::symbol_picker::SymbolPickerAction;
use crate::features::text_field::TextEdit;
use crate::features::theme::ThemeAction;
use crate::features::weekly_notification::WeeklyNotificationAction;
use chrono::NaiveDate;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Action),
    Quit,
}

fn send(action: Action) -> Vec<Command> {
    vec![Command::Send(action)]
}

pub fn handle_event(state: &RootState, event: AppEvent, today: NaiveDate) -> Vec<Command> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, today),
        AppEvent::Action(action) => send(action),
        AppEvent::Tick => handle_tick(state, today),
    }
}

/// The calendar follows the wall clock across midnight.
fn handle_tick(state: &RootState, today: NaiveDate) -> Vec<Command> {
    if state.life_calendar.life.today != today {
        send(Action::LifeCalendar(LifeCalendarAction::TodayChanged(today)))
    } else {
        vec![]
    }
}

fn handle_terminal(state: &RootState, event: CEvent, today: NaiveDate) -> Vec<Command> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key, today),
        _ => vec![],
    }
}

fn handle_key(state: &RootState, key: KeyEvent, today: NaiveDate) -> Vec<Command> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Command::Quit];
    }

    if !state.did_complete_onboarding {
        return handle_onboarding_key(state, key, today);
    }

    // Modal screens capture all input while open
    if let Some(form) = &state.life_goals.add_or_edit_life_goal {
        if state.life_goals.is_add_life_goal_sheet_visible && state.selected_tab == Some(Tab::LifeGoals) {
            return handle_goal_editor_key(form, key);
        }
    }
    if state.selected_tab == Some(Tab::Settings) && state.settings.is_editing() {
        return handle_settings_picker_key(state, key, today);
    }
    if state.selected_tab == Some(Tab::LifeCalendar)
        && state.life_calendar.is_about_the_calendar_sheet_visible
    {
        return handle_about_sheet_key(key);
    }

    match key.code {
        KeyCode::Char('q') => return vec![Command::Quit],
        KeyCode::Tab => {
            return select_tab(state, state.selected_tab.map_or(Tab::LifeCalendar, Tab::next))
        }
        KeyCode::BackTab => {
            return select_tab(state, state.selected_tab.map_or(Tab::Settings, Tab::prev))
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index == state.selected_tab_index {
                return send(Action::TabIndexChanged(index));
            }
            let mut commands = leave(state);
            commands.push(Command::Send(Action::TabIndexChanged(index)));
            if let Some(tab) = Tab::from_ordinal(index) {
                commands.push(Command::Send(on_appear(tab)));
            }
            return commands;
        }
        KeyCode::Esc => return send(Action::PathChanged(Vec::new())),
        _ => {}
    }

    match state.selected_tab {
        Some(Tab::LifeCalendar) => handle_calendar_key(state, key),
        Some(Tab::LifeGoals) => handle_goals_key(state, key),
        Some(Tab::Settings) => handle_settings_key(state, key),
        None => vec![],
    }
}

/// Selecting the current tab pops back to its root; any other tab loads.
fn select_tab(state: &RootState, tab: Tab) -> Vec<Command> {
    let mut commands = if state.selected_tab == Some(tab) {
        Vec::new()
    } else {
        leave(state)
    };
    commands.push(Command::Send(Action::TabChanged(Some(tab))));
    commands.push(Command::Send(on_appear(tab)));
    commands
}

/// Stop the long-lived effects of the tab being left.
fn leave(state: &RootState) -> Vec<Command> {
    state
        .selected_tab
        .and_then(on_disappear)
        .map(Command::Send)
        .into_iter()
        .collect()
}

fn onboarding(action: OnboardingAction) -> Vec<Command> {
    send(Action::Onboarding(action))
}

fn handle_onboarding_key(state: &RootState, key: KeyEvent, today: NaiveDate) -> Vec<Command> {
    let onboarding_state = &state.onboarding;
    match key.code {
        KeyCode::Enter => return onboarding(OnboardingAction::ContinueButtonTapped),
        KeyCode::Esc | KeyCode::Backspace => return onboarding(OnboardingAction::BackButtonTapped),
        KeyCode::Char('q') if onboarding_state.step == OnboardingStep::About => {
            return vec![Command::Quit]
        }
        _ => {}
    }

    match onboarding_state.step {
        OnboardingStep::About => vec![],
        OnboardingStep::Birthday => match date_step(key) {
            Some(step) => {
                let birthday = adjust(onboarding_state.birthday.birthday, step, today);
                onboarding(OnboardingAction::Birthday(BirthdayAction::BirthdayChanged(birthday)))
            }
            None => vec![],
        },
        OnboardingStep::LifeExpectancy => match slider_delta(key) {
            Some(delta) => {
                let years = onboarding_state.life_expectancy.stepped(delta);
                onboarding(OnboardingAction::LifeExpectancy(
                    LifeExpectancyAction::LifeExpectancyChanged(years),
                ))
            }
            None => vec![],
        },
    }
}

/// Date picker keys: days, months, years.
fn date_step(key: KeyEvent) -> Option<DateStep> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(DateStep::Days(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(DateStep::Days(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(DateStep::Months(1)),
        KeyCode::Down | KeyCode::Char('j') => Some(DateStep::Months(-1)),
        KeyCode::PageUp | KeyCode::Char('K') => Some(DateStep::Years(1)),
        KeyCode::PageDown | KeyCode::Char('J') => Some(DateStep::Years(-1)),
        _ => None,
    }
}

fn slider_delta(key: KeyEvent) -> Option<i64> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(-1),
        KeyCode::Right | KeyCode::Char('l') => Some(1),
        KeyCode::Down | KeyCode::Char('j') => Some(-5),
        KeyCode::Up | KeyCode::Char('k') => Some(5),
        _ => None,
    }
}

fn calendar(action: LifeCalendarAction) -> Vec<Command> {
    send(Action::LifeCalendar(action))
}

fn handle_calendar_key(state: &RootState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('c') => calendar(LifeCalendarAction::CalendarTypeChanged(
            state.life_calendar.calendar_type.toggled(),
        )),
        KeyCode::Char('?') | KeyCode::Char('i') => {
            calendar(LifeCalendarAction::AboutLifeCalendarButtonTapped)
        }
        _ => vec![],
    }
}

fn handle_about_sheet_key(key: KeyEvent) -> Vec<Command> {
    match key.code {
        // The key that opened the sheet also closes it.
        KeyCode::Char('?') | KeyCode::Char('i') => {
            calendar(LifeCalendarAction::CloseAboutTheCalendarSheet)
        }
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            calendar(LifeCalendarAction::AboutTheApp(
                AboutTheAppAction::CloseAboutTheCalendarSheet,
            ))
        }
        _ => vec![],
    }
}

fn goals(action: LifeGoalsAction) -> Vec<Command> {
    send(Action::LifeGoals(action))
}

fn handle_goals_key(state: &RootState, key: KeyEvent) -> Vec<Command> {
    let selected = state.life_goals.selected_goal().map(|g| g.id);
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('n') => goals(LifeGoalsAction::AddButtonTapped),
        KeyCode::Char('e') | KeyCode::Enter => selected
            .map(|id| goals(LifeGoalsAction::EditButtonTapped(id)))
            .unwrap_or_default(),
        KeyCode::Char('d') | KeyCode::Delete => selected
            .map(|id| goals(LifeGoalsAction::DeleteGoal(id)))
            .unwrap_or_default(),
        KeyCode::Char(' ') | KeyCode::Char('x') => selected
            .map(|id| goals(LifeGoalsAction::GoalCompletionToggled(id)))
            .unwrap_or_default(),
        KeyCode::Up | KeyCode::Char('k') => goals(LifeGoalsAction::SelectionMoved(-1)),
        KeyCode::Down | KeyCode::Char('j') => goals(LifeGoalsAction::SelectionMoved(1)),
        KeyCode::Char('f') => goals(LifeGoalsAction::FilterChanged(state.life_goals.filter.next())),
        _ => vec![],
    }
}

fn editor(action: AddOrEditLifeGoalAction) -> Vec<Command> {
    goals(LifeGoalsAction::AddOrEditLifeGoal(action))
}

fn handle_goal_editor_key(form: &AddOrEditLifeGoalState, key: KeyEvent) -> Vec<Command> {
    if form.symbol_picker.is_sheet_visible {
        let picker = |action| editor(AddOrEditLifeGoalAction::SymbolPicker(action));
        return match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                picker(SymbolPickerAction::HighlightMoved(-1))
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                picker(SymbolPickerAction::HighlightMoved(1))
            }
            KeyCode::Enter => {
                let name = form.symbol_picker.highlighted_symbol().to_string();
                let mut commands = picker(SymbolPickerAction::SymbolNameChanged(name));
                commands.extend(picker(SymbolPickerAction::HideSheet));
                commands
            }
            KeyCode::Esc => picker(SymbolPickerAction::HideSheet),
            _ => vec![],
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => editor(AddOrEditLifeGoalAction::SaveButtonTapped),
            KeyCode::Char('w') => text_edit(form.focus, TextEdit::DeleteWordBack),
            KeyCode::Char('a') => text_edit(form.focus, TextEdit::Home),
            KeyCode::Char('e') => text_edit(form.focus, TextEdit::End),
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::Esc => editor(AddOrEditLifeGoalAction::CancelButtonTapped),
        KeyCode::Tab => editor(AddOrEditLifeGoalAction::FocusNext),
        KeyCode::Enter => match form.focus {
            GoalField::Symbol => editor(AddOrEditLifeGoalAction::SymbolPicker(
                SymbolPickerAction::ShowSheet,
            )),
            GoalField::Details => editor(AddOrEditLifeGoalAction::SaveButtonTapped),
            GoalField::Title => editor(AddOrEditLifeGoalAction::FocusNext),
        },
        KeyCode::Char(c) => text_edit(form.focus, TextEdit::Insert(c)),
        KeyCode::Backspace => text_edit(form.focus, TextEdit::Backspace),
        KeyCode::Delete => text_edit(form.focus, TextEdit::Delete),
        KeyCode::Left => text_edit(form.focus, TextEdit::Left),
        KeyCode::Right => text_edit(form.focus, TextEdit::Right),
        KeyCode::Home => text_edit(form.focus, TextEdit::Home),
        KeyCode::End => text_edit(form.focus, TextEdit::End),
        _ => vec![],
    }
}

fn text_edit(focus: GoalField, edit: TextEdit) -> Vec<Command> {
    match focus {
        GoalField::Title => editor(AddOrEditLifeGoalAction::TitleEdited(edit)),
        GoalField::Details => editor(AddOrEditLifeGoalAction::DetailsEdited(edit)),
        GoalField::Symbol => vec![],
    }
}

fn settings(action: SettingsAction) -> Vec<Command> {
    send(Action::Settings(action))
}

fn handle_settings_key(state: &RootState, key: KeyEvent) -> Vec<Command> {
    let row = state.settings.selected_row;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => settings(SettingsAction::RowSelected(-1)),
        KeyCode::Down | KeyCode::Char('j') => settings(SettingsAction::RowSelected(1)),
        KeyCode::Left | KeyCode::Char('h') if row == SettingsRow::Theme => settings(
            SettingsAction::Theme(ThemeAction::ThemeChanged(
                state.settings.theme.selected_theme.cycled(-1),
            )),
        ),
        KeyCode::Right | KeyCode::Char('l') if row == SettingsRow::Theme => settings(
            SettingsAction::Theme(ThemeAction::ThemeChanged(
                state.settings.theme.selected_theme.cycled(1),
            )),
        ),
        KeyCode::Enter | KeyCode::Char(' ') => match row {
            SettingsRow::Birthday => {
                settings(SettingsAction::Birthday(BirthdayAction::IsDatePickerVisibleChanged))
            }
            SettingsRow::LifeExpectancy => settings(SettingsAction::LifeExpectancy(
                LifeExpectancyAction::IsSliderVisibleChanged,
            )),
            SettingsRow::Theme => settings(SettingsAction::Theme(ThemeAction::ThemeChanged(
                state.settings.theme.selected_theme.cycled(1),
            ))),
            SettingsRow::WeeklyNotification => settings(SettingsAction::WeeklyNotification(
                WeeklyNotificationAction::IsWeeklyNotificationChanged,
            )),
        },
        _ => vec![],
    }
}

/// The date picker or slider is open. Enter commits, Esc discards.
fn handle_settings_picker_key(state: &RootState, key: KeyEvent, today: NaiveDate) -> Vec<Command> {
    let birthday = &state.settings.birthday;
    if birthday.is_date_picker_visible {
        return match key.code {
            KeyCode::Enter => {
                let mut commands = settings(SettingsAction::Birthday(
                    BirthdayAction::BirthdaySelectionEnded(birthday.birthday),
                ));
                commands.extend(settings(SettingsAction::Birthday(
                    BirthdayAction::IsDatePickerVisibleChanged,
                )));
                commands
            }
            KeyCode::Esc => {
                let mut commands = settings(SettingsAction::Birthday(
                    BirthdayAction::IsDatePickerVisibleChanged,
                ));
                // Reload the stored date over the discarded edit
                commands.extend(settings(SettingsAction::Birthday(BirthdayAction::OnAppear)));
                commands
            }
            _ => match date_step(key) {
                Some(step) => settings(SettingsAction::Birthday(BirthdayAction::BirthdayChanged(
                    adjust(birthday.birthday, step, today),
                ))),
                None => vec![],
            },
        };
    }

    let slider: &LifeExpectancyState = &state.settings.life_expectancy;
    match key.code {
        KeyCode::Enter => {
            let mut commands = settings(SettingsAction::LifeExpectancy(
                LifeExpectancyAction::LifeExpectancySelectionEnded(slider.life_expectancy),
            ));
            commands.extend(settings(SettingsAction::LifeExpectancy(
                LifeExpectancyAction::IsSliderVisibleChanged,
            )));
            commands
        }
        KeyCode::Esc => {
            let mut commands = settings(SettingsAction::LifeExpectancy(
                LifeExpectancyAction::LifeExpectancyChanged(
                    state.life_calendar.life.life_expectancy,
                ),
            ));
            commands.extend(settings(SettingsAction::LifeExpectancy(
                LifeExpectancyAction::IsSliderVisibleChanged,
            )));
            commands
        }
        _ => match slider_delta(key) {
            Some(delta) => settings(SettingsAction::LifeExpectancy(
                LifeExpectancyAction::LifeExpectancyChanged(slider.stepped(delta)),
            )),
            None => vec![],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::memory::{fixed_now, fixed_today, TestEnv};
    use crate::config::AppConfig;
    use crate::features::life_calendar::CalendarType;
    use crate::features::life_goals::LifeGoal;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn onboarded() -> RootState {
        let t = TestEnv::new();
        let mut state = RootState::new(&t.env, &AppConfig::default());
        state.did_complete_onboarding = true;
        state
    }

    fn sent(commands: Vec<Command>) -> Vec<Action> {
        commands
            .into_iter()
            .filter_map(|c| match c {
                Command::Send(action) => Some(action),
                Command::Quit => None,
            })
            .collect()
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut state = onboarded();
        assert_eq!(handle_event(&state, ctrl('c'), fixed_today()), vec![Command::Quit]);
        state.did_complete_onboarding = false;
        assert_eq!(handle_event(&state, ctrl('c'), fixed_today()), vec![Command::Quit]);
    }

    #[test]
    fn test_tab_key_selects_next_tab_and_loads_it() {
        let state = onboarded();
        let actions = sent(handle_event(&state, key(KeyCode::Tab), fixed_today()));
        assert_eq!(
            actions,
            vec![
                Action::LifeCalendar(LifeCalendarAction::OnDisappear),
                Action::TabChanged(Some(Tab::LifeGoals)),
                on_appear(Tab::LifeGoals)
            ]
        );
    }

    #[test]
    fn test_digit_selects_tab_by_index() {
        let state = onboarded();
        let actions = sent(handle_event(&state, key(KeyCode::Char('3')), fixed_today()));
        assert_eq!(
            actions,
            vec![
                Action::LifeCalendar(LifeCalendarAction::OnDisappear),
                Action::TabIndexChanged(2),
                on_appear(Tab::Settings)
            ]
        );

        let actions = sent(handle_event(&state, key(KeyCode::Char('1')), fixed_today()));
        assert_eq!(actions, vec![Action::TabIndexChanged(0)]);

        let actions = sent(handle_event(&state, key(KeyCode::Char('9')), fixed_today()));
        assert_eq!(
            actions,
            vec![
                Action::LifeCalendar(LifeCalendarAction::OnDisappear),
                Action::TabIndexChanged(8)
            ]
        );
    }

    #[test]
    fn test_tab_key_recovers_from_no_selection() {
        let mut state = onboarded();
        state.selected_tab = None;
        state.selected_tab_index = 8;
        let actions = sent(handle_event(&state, key(KeyCode::Tab), fixed_today()));
        assert_eq!(actions[0], Action::TabChanged(Some(Tab::LifeCalendar)));
    }

    #[test]
    fn test_onboarding_keys() {
        let mut state = onboarded();
        state.did_complete_onboarding = false;
        let actions = sent(handle_event(&state, key(KeyCode::Enter), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::Onboarding(OnboardingAction::ContinueButtonTapped)]
        );

        state.onboarding.step = OnboardingStep::LifeExpectancy;
        let actions = sent(handle_event(&state, key(KeyCode::Up), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::Onboarding(OnboardingAction::LifeExpectancy(
                LifeExpectancyAction::LifeExpectancyChanged(85)
            ))]
        );
    }

    #[test]
    fn test_onboarding_date_is_clamped_to_today() {
        let mut state = onboarded();
        state.did_complete_onboarding = false;
        state.onboarding.step = OnboardingStep::Birthday;
        state.onboarding.birthday.birthday = fixed_today();
        let actions = sent(handle_event(&state, key(KeyCode::PageUp), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::Onboarding(OnboardingAction::Birthday(
                BirthdayAction::BirthdayChanged(fixed_today())
            ))]
        );
    }

    #[test]
    fn test_calendar_keys() {
        let mut state = onboarded();
        let actions = sent(handle_event(&state, key(KeyCode::Char('c')), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::LifeCalendar(LifeCalendarAction::CalendarTypeChanged(
                CalendarType::CurrentYear
            ))]
        );

        state.life_calendar.is_about_the_calendar_sheet_visible = true;
        let actions = sent(handle_event(&state, key(KeyCode::Esc), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::LifeCalendar(LifeCalendarAction::AboutTheApp(
                AboutTheAppAction::CloseAboutTheCalendarSheet
            ))]
        );

        let actions = sent(handle_event(&state, key(KeyCode::Char('?')), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::LifeCalendar(LifeCalendarAction::CloseAboutTheCalendarSheet)]
        );
    }

    #[test]
    fn test_goal_editor_captures_typing() {
        let mut state = onboarded();
        state.selected_tab = Some(Tab::LifeGoals);
        state.life_goals.add_or_edit_life_goal = Some(AddOrEditLifeGoalState::add());
        state.life_goals.is_add_life_goal_sheet_visible = true;

        let commands = handle_event(&state, key(KeyCode::Char('q')), fixed_today());
        assert_eq!(
            sent(commands),
            vec![Action::LifeGoals(LifeGoalsAction::AddOrEditLifeGoal(
                AddOrEditLifeGoalAction::TitleEdited(TextEdit::Insert('q'))
            ))]
        );

        let actions = sent(handle_event(&state, ctrl('s'), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::LifeGoals(LifeGoalsAction::AddOrEditLifeGoal(
                AddOrEditLifeGoalAction::SaveButtonTapped
            ))]
        );
    }

    #[test]
    fn test_goal_list_acts_on_selection() {
        let mut state = onboarded();
        state.selected_tab = Some(Tab::LifeGoals);
        let actions = sent(handle_event(&state, key(KeyCode::Char('d')), fixed_today()));
        assert!(actions.is_empty());

        state.life_goals.goals = vec![LifeGoal {
            id: 4,
            title: "Run a marathon".into(),
            details: String::new(),
            symbol_name: "figure.run".into(),
            created_at: fixed_now(),
            finished_at: None,
        }];
        let actions = sent(handle_event(&state, key(KeyCode::Char(' ')), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::LifeGoals(LifeGoalsAction::GoalCompletionToggled(4))]
        );
    }

    #[test]
    fn test_settings_slider_commits_on_enter() {
        let mut state = onboarded();
        state.selected_tab = Some(Tab::Settings);
        state.settings.life_expectancy.is_slider_visible = true;
        state.settings.life_expectancy.life_expectancy = 88;
        let actions = sent(handle_event(&state, key(KeyCode::Enter), fixed_today()));
        assert_eq!(
            actions,
            vec![
                Action::Settings(SettingsAction::LifeExpectancy(
                    LifeExpectancyAction::LifeExpectancySelectionEnded(88)
                )),
                Action::Settings(SettingsAction::LifeExpectancy(
                    LifeExpectancyAction::IsSliderVisibleChanged
                )),
            ]
        );
    }

    #[test]
    fn test_settings_theme_row_cycles() {
        let mut state = onboarded();
        state.selected_tab = Some(Tab::Settings);
        state.settings.selected_row = SettingsRow::Theme;
        let current = state.settings.theme.selected_theme;
        let actions = sent(handle_event(&state, key(KeyCode::Left), fixed_today()));
        assert_eq!(
            actions,
            vec![Action::Settings(SettingsAction::Theme(ThemeAction::ThemeChanged(
                current.cycled(-1)
            )))]
        );
    }

    #[test]
    fn test_tick_reports_new_day_once() {
        let state = onboarded();
        assert!(handle_event(&state, AppEvent::Tick, fixed_today()).is_empty());
        let tomorrow = fixed_today().succ_opt().unwrap();
        assert_eq!(
            sent(handle_event(&state, AppEvent::Tick, tomorrow)),
            vec![Action::LifeCalendar(LifeCalendarAction::TodayChanged(tomorrow))]
        );
    }

    #[test]
    fn test_fed_back_actions_pass_through() {
        let state = onboarded();
        let action = Action::PathChanged(vec![Tab::Settings]);
        assert_eq!(
            handle_event(&state, AppEvent::Action(action.clone()), fixed_today()),
            vec![Command::Send(action)]
        );
    }
}
