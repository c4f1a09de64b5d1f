mod builder;
mod state;

use julia_actor::Addr;
use julia_catalog::Service;
use tokio::sync::oneshot;

use crate::quote::{SelectionItem, Totals};
use crate::transcript::{ChatMessage, ChatOption, View};
use crate::widget::state::{
    Closed, Opened, OptionChosen, QuoteConfirmed, ServiceToggled,
    TakeSnapshot, UserText, WidgetState,
};
pub use builder::WidgetBuilder;

/// A chat widget instance, which owns one conversation session.
///
/// All state lives behind a single actor, so every operation below is
/// applied strictly in call order no matter how fast the user clicks;
/// the widget is the state container and these operations are its only
/// mutators.
pub struct Widget {
    addr: Addr<WidgetState>,
}

/// Something the rendering surface should react to.
#[derive(Clone, Debug)]
pub enum WidgetEvent {
    /// A message was appended to the transcript.
    MessageAppended(ChatMessage),
    /// The typing indicator turned on or off.
    TypingChanged(bool),
    /// The active view changed.
    ViewChanged(View),
    /// A transient user-facing notice (validation errors).
    Notice(String),
    /// A deep link to open in a new browsing context.
    OpenLink(String),
    /// The turn queue drained and no submission is in flight.
    Idle,
}

/// A point-in-time copy of the widget state, for rendering and tests.
#[derive(Clone, Debug)]
pub struct WidgetSnapshot {
    /// The transcript, in display order.
    pub messages: Vec<ChatMessage>,
    /// The active view.
    pub view: View,
    /// Whether the typing indicator is showing.
    pub is_typing: bool,
    /// Whether the widget window is open.
    pub is_open: bool,
    /// The current selection, in insertion order.
    pub selection: Vec<SelectionItem>,
    /// Totals over the current selection.
    pub totals: Totals,
}

impl Widget {
    /// Opens the widget window.
    ///
    /// The first open posts the greeting turn.
    pub fn open(&self) {
        self.send(Opened);
    }

    /// Closes the widget window.
    ///
    /// Pending bot turns are not cancelled; a scheduled reply still
    /// lands after a reopen.
    pub fn close(&self) {
        self.send(Closed);
    }

    /// Posts a free-text user message.
    pub fn send_text<S: Into<String>>(&self, text: S) {
        self.send(UserText(text.into()));
    }

    /// Clicks an option button.
    pub fn select_option(&self, option: ChatOption) {
        self.send(OptionChosen(option));
    }

    /// Toggles a service in the quote selection.
    pub fn toggle_service(&self, service: Service) {
        self.send(ServiceToggled(service));
    }

    /// Confirms the quote selection and starts lead capture.
    ///
    /// An empty selection raises a [`WidgetEvent::Notice`] and changes
    /// nothing.
    pub fn confirm_quote(&self) {
        self.send(QuoteConfirmed);
    }

    /// Takes a snapshot of the current state.
    ///
    /// The snapshot is taken after every operation sent before it, so
    /// it doubles as a synchronization barrier in tests.
    pub async fn snapshot(&self) -> WidgetSnapshot {
        let (tx, rx) = oneshot::channel();
        self.send(TakeSnapshot(tx));
        rx.await.expect("widget task has been dropped too early")
    }

    #[inline]
    fn send<E: julia_actor::Event<WidgetState> + 'static>(&self, event: E) {
        self.addr
            .send(event)
            .expect("widget task has been dropped too early");
    }
}

impl Widget {
    fn spawn_from_builder(builder: WidgetBuilder) -> Self {
        let state = WidgetState::from_builder(builder);
        Self {
            addr: Addr::spawn(state, Some("widget")),
        }
    }
}
