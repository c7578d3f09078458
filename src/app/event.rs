use crate::app::action::Action;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Follow-up action fed back by an effect
    Action(Action),

    /// Tick for clock-driven refresh
    Tick,
}
