//! Transcript-related types.

use julia_catalog::{Pack, QuizChoice};

/// Who produced a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speaker {
    /// The assistant.
    Bot,
    /// The visitor.
    User,
}

/// One entry of the conversation transcript.
///
/// The transcript is append-only and insertion order is display order;
/// a message is never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Strictly increasing identifier within one conversation.
    pub id: u64,
    /// Who produced the message.
    pub speaker: Speaker,
    /// The message text.
    pub text: String,
    /// Option buttons attached to the message, if any.
    pub options: Vec<ChatOption>,
    /// Marks a quote-summary message.
    pub is_quote: bool,
}

/// An option button a bot message can carry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatOption {
    /// The button label, also echoed as the user message when clicked.
    pub label: String,
    /// What clicking the button does.
    pub action: Action,
}

impl ChatOption {
    /// Creates an option with the given label and action.
    #[inline]
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Everything an option button can trigger.
///
/// The vocabulary is closed and dispatch is an exhaustive match, so a
/// new action cannot silently fall through to the default text handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Switch to the quote view and start itemized selection.
    StartQuote,
    /// Switch to the service browsing view.
    BrowseServices,
    /// Start the diagnostic quiz.
    StartQuiz,
    /// Show the ways to reach a human advisor.
    ContactAdvisor,
    /// Open the WhatsApp deep link.
    OpenWhatsApp,
    /// Open the mailto deep link.
    OpenEmail,
    /// Open the appointment-booking link.
    OpenCalendar,
    /// A canned question; its label goes through the intent matcher.
    CannedQuestion,
    /// Answer the current quiz question.
    AnswerQuiz(QuizChoice),
    /// Replace the selection with a pack and proceed to lead capture.
    ChoosePack(Pack),
    /// Cancel the current flow and return to the chat view.
    CancelFlow,
    /// Treat the label as free text.
    FreeText,
}

/// The active content panel of the widget.
///
/// Exactly one view is active at a time; it determines how free-text
/// input is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    /// The plain conversation panel.
    Chat,
    /// The service-selection panel of the quote flow.
    Quote,
    /// The service browsing panel.
    Services,
    /// The diagnostic quiz panel.
    Quiz,
    /// The lead-capture panel; free text feeds the client info steps.
    CollectInfo,
}
