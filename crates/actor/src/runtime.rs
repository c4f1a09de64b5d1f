use std::sync::Weak;

use tokio::select;
use tokio::sync::{mpsc, watch};

use crate::addr::Mailbox;
use crate::{Addr, Event};

pub(crate) async fn drive<S: Send + Sync + 'static>(
    mailbox: Weak<Mailbox<S>>,
    mut state: S,
    mut event_rx: mpsc::UnboundedReceiver<Box<dyn Event<S>>>,
    mut stop_rx: watch::Receiver<bool>,
) {
    debug!("actor started");
    loop {
        let event = select! {
            biased;

            _ = stop_rx.changed() => {
                break;
            }
            event = event_rx.recv() => {
                let Some(event) = event else {
                    break;
                };
                event
            }
        };
        trace!("received event: {event:?}");

        let Some(mailbox) = mailbox.upgrade() else {
            // All addresses are gone, nobody can observe the state
            // anymore.
            break;
        };
        event.apply(&mut state, &Addr::from_mailbox(mailbox));
    }
    debug!("actor will terminate");
}
