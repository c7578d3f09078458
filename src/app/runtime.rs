//! Executes reducer effects on the tokio runtime.
//!
//! Every follow-up action is sent back through the application event
//! channel, so it is processed by the same single-threaded loop that
//! dispatched the original action.

use crate::app::action::Action;
use crate::app::effect::{Effect, EffectId, Work};
use crate::app::event::AppEvent;
use futures::StreamExt;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

pub struct EffectRuntime {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    in_flight: HashMap<EffectId, JoinHandle<()>>,
}

impl EffectRuntime {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            in_flight: HashMap::new(),
        }
    }

    /// Start every member of `effect`. Must be called from within a tokio
    /// runtime.
    pub fn run(&mut self, effect: Effect<Action>) {
        match effect {
            Effect::None => {}
            Effect::Cancel(id) => self.cancel(id),
            Effect::Batch(effects) => {
                for effect in effects {
                    self.run(effect);
                }
            }
            Effect::Run { id, work } => {
                let handle = self.spawn(work);
                if let Some(id) = id {
                    if let Some(previous) = self.in_flight.insert(id, handle) {
                        if !previous.is_finished() {
                            debug!(%id, "superseding in-flight effect");
                        }
                        previous.abort();
                    }
                }
            }
        }
        self.in_flight.retain(|_, handle| !handle.is_finished());
    }

    pub fn cancel(&mut self, id: EffectId) {
        if let Some(handle) = self.in_flight.remove(&id) {
            debug!(%id, "cancelling effect");
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
    }

    /// Number of tracked cancellable effects still running.
    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.in_flight
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn spawn(&self, work: Work<Action>) -> JoinHandle<()> {
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match work {
                Work::Once(fut) => {
                    if let Some(action) = fut.await {
                        trace!(?action, "effect finished");
                        let _ = tx.send(AppEvent::Action(action));
                    }
                }
                Work::Stream(mut stream) => {
                    while let Some(action) = stream.next().await {
                        if tx.send(AppEvent::Action(action)).is_err() {
                            break;
                        }
                    }
                }
            }
        })
    }
}
