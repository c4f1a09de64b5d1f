//! An abstraction layer for the quote-recording backend.
//!
//! This crate establishes the protocol between the assistant and the
//! external CRUD API that records quotes and contact messages, so that
//! the engine can run against the real HTTP service or an in-memory
//! fake without modifying the core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod forms;
mod submission;

pub use error::*;
pub use forms::*;
pub use submission::*;

/// A destination for finalized quotes and form submissions.
///
/// Every operation is a single attempt: implementors must not retry on
/// their own, the caller decides what a failure means to the user.
pub trait Backend: Send + Sync {
    /// The error type that may be returned by this backend.
    type Error: BackendError;

    /// Records a finalized quote built by the assistant.
    ///
    /// Any successful completion means the quote was accepted; no
    /// response body is consumed beyond that.
    fn record_quote(
        &self,
        submission: &QuoteSubmission,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'static;

    /// Sends a contact-form message and returns the server receipt.
    fn send_contact(
        &self,
        form: &ContactForm,
    ) -> impl Future<Output = Result<Receipt, Self::Error>> + Send + 'static;

    /// Sends a simple quote-form request and returns the server receipt.
    fn send_quote_form(
        &self,
        form: &QuoteForm,
    ) -> impl Future<Output = Result<Receipt, Self::Error>> + Send + 'static;
}
