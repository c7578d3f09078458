//! The "about the calendar" sheet.

use crate::app::effect::Effect;
use crate::life::Life;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutTheAppState {
    pub life: Life,
    pub is_about_the_calendar_sheet_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AboutTheAppAction {
    CloseAboutTheCalendarSheet,
}

pub fn reduce(state: &mut AboutTheAppState, action: AboutTheAppAction) -> Effect<AboutTheAppAction> {
    match action {
        AboutTheAppAction::CloseAboutTheCalendarSheet => {
            state.is_about_the_calendar_sheet_visible = false;
            Effect::none()
        }
    }
}
