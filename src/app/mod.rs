//! Core application logic: root state, actions, effects and the store that
//! ties them together.

pub mod action;
pub mod effect;
pub mod environment;
pub mod event;
pub mod handler;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod store;
