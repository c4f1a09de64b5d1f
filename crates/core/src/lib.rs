//! Core logic of the assistant: the conversation engine, quote
//! building, lead capture, the diagnostic quiz and form submission.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod backend_client;
pub mod forms;
mod intent;
mod lead;
pub mod links;
mod quiz;
mod quote;
mod transcript;
mod widget;

pub use backend_client::BackendClient;
pub use lead::ClientInfo;
pub use quiz::Recommendation;
pub use quote::{Selection, SelectionItem, Totals};
pub use transcript::{Action, ChatMessage, ChatOption, Speaker, View};
pub use widget::{Widget, WidgetBuilder, WidgetEvent, WidgetSnapshot};
