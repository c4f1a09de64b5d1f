use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::Instrument;

use crate::runtime::drive;
use crate::{Event, StoppedError};

pub(crate) struct Mailbox<S> {
    event_tx: mpsc::UnboundedSender<Box<dyn Event<S>>>,
    stop_tx: watch::Sender<bool>,
}

/// Address of a running actor.
///
/// Addresses are cheap to clone; the actor keeps running until it is
/// stopped explicitly or the last address is dropped.
pub struct Addr<S> {
    mailbox: Arc<Mailbox<S>>,
}

impl<S: Send + Sync + 'static> Addr<S> {
    /// Spawns a new actor owning `state` and returns its address.
    ///
    /// The optional label only shows up in trace output.
    pub fn spawn(state: S, label: Option<&str>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);
        let mailbox = Arc::new(Mailbox { event_tx, stop_tx });

        tokio::spawn(
            drive(Arc::downgrade(&mailbox), state, event_rx, stop_rx)
                .instrument(trace_span!("actor", label = label)),
        );
        Self { mailbox }
    }

    #[inline]
    pub(crate) fn from_mailbox(mailbox: Arc<Mailbox<S>>) -> Self {
        Self { mailbox }
    }

    /// Sends an event to the actor.
    #[inline]
    pub fn send<E: Event<S> + 'static>(
        &self,
        event: E,
    ) -> Result<(), StoppedError> {
        self.mailbox
            .event_tx
            .send(Box::new(event))
            .map_err(|_| StoppedError)
    }

    /// Asks the actor to stop.
    ///
    /// Events already in the mailbox may still be discarded; the actor
    /// quits as soon as it observes the signal.
    #[inline]
    pub fn stop(&self) {
        self.mailbox.stop_tx.send(true).ok();
    }
}

impl<S> Clone for Addr<S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            mailbox: Arc::clone(&self.mailbox),
        }
    }
}
