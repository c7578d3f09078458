//! A life measured in weeks.
//!
//! The calendar is a grid of `life_expectancy` rows (one per year of age)
//! by [`TOTAL_WEEKS_IN_A_YEAR`] columns. Every quantity here is computed
//! against the snapshot's `today`, never the wall clock.

use chrono::{Datelike, Months, NaiveDate};

pub const TOTAL_WEEKS_IN_A_YEAR: u32 = 52;

/// Where a single week cell sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekState {
    Spent,
    Current,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Life {
    pub birthday: NaiveDate,
    pub life_expectancy: u32,
    pub today: NaiveDate,
}

impl Life {
    pub fn new(birthday: NaiveDate, life_expectancy: u32, today: NaiveDate) -> Self {
        Self {
            birthday,
            life_expectancy,
            today,
        }
    }

    /// Full years lived.
    pub fn age(&self) -> u32 {
        self.today.years_since(self.birthday).unwrap_or(0)
    }

    pub fn total_weeks(&self) -> u32 {
        self.life_expectancy.saturating_mul(TOTAL_WEEKS_IN_A_YEAR)
    }

    /// Most recent birthday on or before today.
    pub fn last_birthday(&self) -> NaiveDate {
        let this_year = anniversary(self.birthday, self.today.year());
        if this_year <= self.today {
            this_year
        } else {
            anniversary(self.birthday, self.today.year() - 1)
        }
    }

    /// Weeks spent since the last birthday, in `0..TOTAL_WEEKS_IN_A_YEAR`.
    pub fn current_year_weeks_spent(&self) -> u32 {
        if self.today < self.birthday {
            return 0;
        }
        let days = (self.today - self.last_birthday()).num_days().max(0) as u32;
        (days / 7).min(TOTAL_WEEKS_IN_A_YEAR - 1)
    }

    pub fn current_year_remaining_weeks(&self) -> u32 {
        TOTAL_WEEKS_IN_A_YEAR - self.current_year_weeks_spent()
    }

    pub fn number_of_weeks_spent(&self) -> u32 {
        if self.today < self.birthday {
            return 0;
        }
        let weeks = self
            .age()
            .saturating_mul(TOTAL_WEEKS_IN_A_YEAR)
            .saturating_add(self.current_year_weeks_spent());
        weeks.min(self.total_weeks())
    }

    pub fn number_of_weeks_left(&self) -> u32 {
        self.total_weeks()
            .saturating_sub(self.number_of_weeks_spent())
    }

    /// Fraction of the expected life already spent, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = self.total_weeks();
        if total == 0 {
            return 1.0;
        }
        self.number_of_weeks_spent() as f64 / total as f64
    }

    pub fn current_year_progress(&self) -> f64 {
        self.current_year_weeks_spent() as f64 / TOTAL_WEEKS_IN_A_YEAR as f64
    }

    pub fn formatted_progress(&self) -> String {
        format!("{:.1}", self.progress() * 100.0)
    }

    pub fn formatted_current_year_progress(&self) -> String {
        format!("{:.1}", self.current_year_progress() * 100.0)
    }

    /// State of the cell at `year` of age and `week` within that year.
    pub fn week_state(&self, year: u32, week: u32) -> WeekState {
        let index = year * TOTAL_WEEKS_IN_A_YEAR + week;
        let spent = self.number_of_weeks_spent();
        if self.today < self.birthday || index > spent {
            WeekState::Left
        } else if index == spent {
            WeekState::Current
        } else {
            WeekState::Spent
        }
    }
}

/// The default birthday offered before the user picks one.
pub fn default_birthday(today: NaiveDate, years_ago: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years_ago.saturating_mul(12)))
        .unwrap_or(today)
}

/// `birthday` moved into `year`; Feb 29 falls back to Feb 28.
fn anniversary(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birthday)
}
