//! Feature reducers. Each module owns a state record, a closed action enum
//! and a `reduce` function; parents embed children and route their actions.

pub mod about_the_app;
pub mod add_or_edit_life_goal;
pub mod birthday;
pub mod life_calendar;
pub mod life_expectancy;
pub mod life_goals;
pub mod onboarding;
pub mod settings;
pub mod symbol_picker;
pub mod text_field;
pub mod theme;
pub mod weekly_notification;
