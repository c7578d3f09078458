//! The user's birthday and its date picker.

use crate::app::effect::{Effect, EffectId};
use crate::app::environment::Environment;
use chrono::{Days, Months, NaiveDate};
use tracing::warn;

pub const REQUEST_ID: EffectId = EffectId("birthday.request");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayState {
    pub birthday: NaiveDate,
    pub is_date_picker_visible: bool,
}

impl BirthdayState {
    pub fn new(birthday: NaiveDate) -> Self {
        Self {
            birthday,
            is_date_picker_visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayAction {
    /// The picked date changed. Local only.
    BirthdayChanged(NaiveDate),
    /// The user confirmed a date; persists it.
    BirthdaySelectionEnded(NaiveDate),
    IsDatePickerVisibleChanged,
    OnAppear,
}

pub fn reduce(
    state: &mut BirthdayState,
    action: BirthdayAction,
    env: &Environment,
) -> Effect<BirthdayAction> {
    match action {
        BirthdayAction::BirthdayChanged(birthday) => {
            state.birthday = birthday;
            Effect::none()
        }
        BirthdayAction::BirthdaySelectionEnded(birthday) => {
            let write = env.settings.update_birthday(birthday);
            Effect::task(async move {
                if let Err(e) = write.await {
                    warn!(error = %format!("{:#}", e), "failed to persist birthday");
                }
                BirthdayAction::BirthdayChanged(birthday)
            })
            .cancellable(REQUEST_ID)
        }
        BirthdayAction::IsDatePickerVisibleChanged => {
            state.is_date_picker_visible = !state.is_date_picker_visible;
            Effect::none()
        }
        BirthdayAction::OnAppear => {
            let birthday = env.settings.birthday();
            Effect::task(async move { BirthdayAction::BirthdayChanged(birthday) })
        }
    }
}

/// A single date picker adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStep {
    Days(i64),
    Months(i32),
    Years(i32),
}

/// Apply `step` to `date`, never moving past `today`.
pub fn adjust(date: NaiveDate, step: DateStep, today: NaiveDate) -> NaiveDate {
    let shifted = match step {
        DateStep::Days(n) if n >= 0 => date.checked_add_days(Days::new(n as u64)),
        DateStep::Days(n) => date.checked_sub_days(Days::new(n.unsigned_abs())),
        DateStep::Months(n) => shift_months(date, n),
        DateStep::Years(n) => shift_months(date, n.saturating_mul(12)),
    };
    shifted.unwrap_or(date).min(today)
}

fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}
