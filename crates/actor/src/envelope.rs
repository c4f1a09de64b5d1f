use std::fmt::Debug;

use crate::Addr;

/// An event that an actor with state `S` can process.
///
/// Processing has mutable access to the state and a handle to the
/// actor's own address, so an event may schedule follow-up events
/// (possibly from a spawned task).
pub trait Event<S>: BoxedEvent<S> {
    /// Applies the event to the actor's state.
    fn apply(self, state: &mut S, addr: &Addr<S>);
}

/// Helper trait for applying boxed events.
pub trait BoxedEvent<S>: Send + Debug + 'static {
    #[doc(hidden)]
    fn apply_boxed(self: Box<Self>, state: &mut S, addr: &Addr<S>);
}

impl<S, E: Event<S>> BoxedEvent<S> for E {
    #[inline]
    fn apply_boxed(self: Box<Self>, state: &mut S, addr: &Addr<S>) {
        (*self).apply(state, addr)
    }
}

impl<S, E: Event<S> + ?Sized> Event<S> for Box<E> {
    #[inline]
    fn apply(self, state: &mut S, addr: &Addr<S>) {
        self.apply_boxed(state, addr)
    }
}
