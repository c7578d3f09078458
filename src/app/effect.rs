//! Side effects described by reducers.
//!
//! A reducer never performs I/O itself. It returns an [`Effect`] describing
//! the work, and the [`EffectRuntime`](crate::app::runtime::EffectRuntime)
//! executes it on the tokio runtime, feeding every produced action back
//! through the event channel.

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, Stream, StreamExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Reducer-scoped identifier for a cancellable effect.
///
/// Starting an effect under an id that already has one in flight cancels
/// the older effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(pub &'static str);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The asynchronous body of an effect.
pub enum Work<A> {
    /// Performs one external call and yields at most one follow-up action.
    Once(BoxFuture<'static, Option<A>>),
    /// A long-lived subscription yielding one action per item.
    Stream(BoxStream<'static, A>),
}

pub enum Effect<A> {
    None,
    Run { id: Option<EffectId>, work: Work<A> },
    Cancel(EffectId),
    Batch(Vec<Effect<A>>),
}

impl<A: Send + 'static> Effect<A> {
    pub fn none() -> Self {
        Effect::None
    }

    /// Run `fut` and feed its output back as an action.
    pub fn task<F>(fut: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Effect::Run {
            id: None,
            work: Work::Once(fut.map(Some).boxed()),
        }
    }

    /// Run `fut`, feeding back an action only when it yields one.
    pub fn optional<F>(fut: F) -> Self
    where
        F: Future<Output = Option<A>> + Send + 'static,
    {
        Effect::Run {
            id: None,
            work: Work::Once(fut.boxed()),
        }
    }

    pub fn fire_and_forget<F>(fut: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Effect::Run {
            id: None,
            work: Work::Once(fut.map(|_| None).boxed()),
        }
    }

    /// Feed every item of `stream` back as an action until it ends or the
    /// effect is cancelled.
    pub fn subscription<S>(stream: S) -> Self
    where
        S: Stream<Item = A> + Send + 'static,
    {
        Effect::Run {
            id: None,
            work: Work::Stream(stream.boxed()),
        }
    }

    pub fn cancel(id: EffectId) -> Self {
        Effect::Cancel(id)
    }

    /// Combine several effects, dropping the empty ones.
    pub fn batch(effects: impl IntoIterator<Item = Effect<A>>) -> Self {
        let mut effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.pop().unwrap_or(Effect::None),
            _ => Effect::Batch(effects),
        }
    }

    /// Tag a running effect with `id`. Only applies to [`Effect::Run`];
    /// batches keep the ids of their members.
    pub fn cancellable(self, id: EffectId) -> Self {
        match self {
            Effect::Run { work, .. } => Effect::Run { id: Some(id), work },
            other => other,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// Lift a child effect into its parent's action type.
    pub fn map<B, F>(self, f: F) -> Effect<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map_shared(Arc::new(f))
    }

    fn map_shared<B>(self, f: Arc<dyn Fn(A) -> B + Send + Sync>) -> Effect<B>
    where
        B: Send + 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Cancel(id) => Effect::Cancel(id),
            Effect::Run { id, work } => {
                let work = match work {
                    Work::Once(fut) => Work::Once(fut.map(move |a| a.map(|a| f(a))).boxed()),
                    Work::Stream(stream) => Work::Stream(stream.map(move |a| f(a)).boxed()),
                };
                Effect::Run { id, work }
            }
            Effect::Batch(effects) => Effect::Batch(
                effects
                    .into_iter()
                    .map(|e| e.map_shared(Arc::clone(&f)))
                    .collect(),
            ),
        }
    }

    /// Identifiers of every cancellable member of this effect.
    #[cfg(test)]
    pub fn ids(&self) -> Vec<EffectId> {
        match self {
            Effect::Run { id: Some(id), .. } | Effect::Cancel(id) => vec![*id],
            Effect::Batch(effects) => effects.iter().flat_map(|e| e.ids()).collect(),
            _ => Vec::new(),
        }
    }

    /// Run every member in order, awaiting each one, and collect the
    /// actions it produces. Subscriptions are drained to completion.
    #[cfg(test)]
    pub fn collect(self) -> BoxFuture<'static, Vec<A>> {
        async move {
            match self {
                Effect::None | Effect::Cancel(_) => Vec::new(),
                Effect::Run {
                    work: Work::Once(fut),
                    ..
                } => fut.await.into_iter().collect(),
                Effect::Run {
                    work: Work::Stream(stream),
                    ..
                } => stream.collect().await,
                Effect::Batch(effects) => {
                    let mut out = Vec::new();
                    for effect in effects {
                        out.extend(effect.collect().await);
                    }
                    out
                }
            }
        }
        .boxed()
    }

    #[cfg(test)]
    pub fn is_subscription(&self) -> bool {
        matches!(
            self,
            Effect::Run {
                work: Work::Stream(_),
                ..
            }
        )
    }
}

impl<A> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => f.write_str("Effect::None"),
            Effect::Run { id, work } => {
                let kind = match work {
                    Work::Once(_) => "once",
                    Work::Stream(_) => "stream",
                };
                f.debug_struct("Effect::Run")
                    .field("id", id)
                    .field("work", &kind)
                    .finish()
            }
            Effect::Cancel(id) => write!(f, "Effect::Cancel({})", id),
            Effect::Batch(effects) => f.debug_list().entries(effects).finish(),
        }
    }
}
