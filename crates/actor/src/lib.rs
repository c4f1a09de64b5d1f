//! A minimal mailbox-based actor runtime.
//!
//! The conversation engine needs one guarantee above all: everything
//! that mutates a widget's state must happen in the order it was sent,
//! no matter which task produced it. An actor owns its state on a
//! single task and drains its mailbox strictly in send order, which
//! gives that guarantee without any locking discipline.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod addr;
mod envelope;
mod error;
mod runtime;

pub use addr::Addr;
pub use envelope::Event;
pub use error::StoppedError;

#[cfg(test)]
mod tests {
    use tokio::sync::oneshot;

    use super::*;

    #[derive(Default)]
    struct Journal {
        lines: Vec<String>,
    }

    #[derive(Debug)]
    struct Append(&'static str);

    impl Event<Journal> for Append {
        fn apply(self, state: &mut Journal, _addr: &Addr<Journal>) {
            state.lines.push(self.0.to_owned());
        }
    }

    #[derive(Debug)]
    struct ReadBack(oneshot::Sender<Vec<String>>);

    impl Event<Journal> for ReadBack {
        fn apply(self, state: &mut Journal, _addr: &Addr<Journal>) {
            self.0.send(state.lines.clone()).unwrap();
        }
    }

    #[tokio::test]
    async fn test_events_apply_in_send_order() {
        let addr = Addr::spawn(Journal::default(), Some("journal"));
        addr.send(Append("premier")).unwrap();
        addr.send(Append("deuxième")).unwrap();
        addr.send(Append("troisième")).unwrap();

        let (tx, rx) = oneshot::channel();
        addr.send(ReadBack(tx)).unwrap();
        assert_eq!(
            rx.await.unwrap(),
            ["premier", "deuxième", "troisième"]
        );
    }

    #[tokio::test]
    async fn test_stop_closes_mailbox() {
        let addr = Addr::spawn(Journal::default(), None);
        addr.stop();
        // The runtime needs a tick to observe the stop signal; once it
        // quits, sending must fail.
        while addr.send(Append("tard")).is_ok() {
            tokio::task::yield_now().await;
        }
    }
}
