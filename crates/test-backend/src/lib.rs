//! A local fake backend for testing purpose.
//!
//! The backend records everything it receives and answers successfully
//! by default. Tests can script it to fail with a chosen [`ErrorKind`],
//! or to delay its answers to exercise in-flight states.
//!
//! # Note
//!
//! This type is not optimized for production use; submissions are kept
//! in memory forever. You should only use it for testing.

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use julia_backend::{
    Backend, BackendError, ContactForm, ErrorKind, QuoteForm,
    QuoteSubmission, Receipt,
};
use tokio::time::sleep;

/// The error returned by a scripted failure.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl BackendError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Inner {
    quotes: Mutex<Vec<QuoteSubmission>>,
    contacts: Mutex<Vec<ContactForm>>,
    quote_forms: Mutex<Vec<QuoteForm>>,
    fail_with: Mutex<Option<ErrorKind>>,
    delay: Mutex<Option<Duration>>,
    receipt_message: Mutex<String>,
}

/// An in-memory backend that records every submission it receives.
///
/// Cloning is cheap and every clone shares the same recordings, so a
/// test can keep one handle while the widget owns another.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    inner: Arc<Inner>,
}

impl RecordingBackend {
    /// Makes every following operation fail with the given kind.
    pub fn fail_with(&self, kind: ErrorKind) {
        *self.inner.fail_with.lock().unwrap() = Some(kind);
    }

    /// Makes following operations succeed again.
    pub fn succeed(&self) {
        *self.inner.fail_with.lock().unwrap() = None;
    }

    /// Delays every answer by the given duration.
    pub fn set_delay(&self, delay: Duration) {
        *self.inner.delay.lock().unwrap() = Some(delay);
    }

    /// Sets the receipt message returned by the form endpoints.
    pub fn set_receipt_message(&self, message: impl Into<String>) {
        *self.inner.receipt_message.lock().unwrap() = message.into();
    }

    /// Returns the recorded quote submissions.
    pub fn quotes(&self) -> Vec<QuoteSubmission> {
        self.inner.quotes.lock().unwrap().clone()
    }

    /// Returns the recorded contact forms.
    pub fn contacts(&self) -> Vec<ContactForm> {
        self.inner.contacts.lock().unwrap().clone()
    }

    /// Returns the recorded simple quote forms.
    pub fn quote_forms(&self) -> Vec<QuoteForm> {
        self.inner.quote_forms.lock().unwrap().clone()
    }

    fn answer<T>(&self, record: impl FnOnce(&Inner), value: T) -> Answer<T> {
        let scripted_failure = *self.inner.fail_with.lock().unwrap();
        let result = match scripted_failure {
            Some(kind) => Err(Error { kind }),
            None => {
                record(&self.inner);
                Ok(value)
            }
        };
        Answer {
            delay: *self.inner.delay.lock().unwrap(),
            result,
        }
    }

    fn receipt(&self) -> Receipt {
        Receipt {
            message: self.inner.receipt_message.lock().unwrap().clone(),
        }
    }
}

struct Answer<T> {
    delay: Option<Duration>,
    result: Result<T, Error>,
}

impl<T> Answer<T> {
    async fn resolve(self) -> Result<T, Error> {
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        self.result
    }
}

impl Backend for RecordingBackend {
    type Error = Error;

    fn record_quote(
        &self,
        submission: &QuoteSubmission,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'static {
        let submission = submission.clone();
        let answer = self.answer(
            move |inner| inner.quotes.lock().unwrap().push(submission),
            (),
        );
        answer.resolve()
    }

    fn send_contact(
        &self,
        form: &ContactForm,
    ) -> impl Future<Output = Result<Receipt, Self::Error>> + Send + 'static
    {
        let form = form.clone();
        let answer = self.answer(
            move |inner| inner.contacts.lock().unwrap().push(form),
            self.receipt(),
        );
        answer.resolve()
    }

    fn send_quote_form(
        &self,
        form: &QuoteForm,
    ) -> impl Future<Output = Result<Receipt, Self::Error>> + Send + 'static
    {
        let form = form.clone();
        let answer = self.answer(
            move |inner| inner.quote_forms.lock().unwrap().push(form),
            self.receipt(),
        );
        answer.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> QuoteSubmission {
        QuoteSubmission {
            client_name: "Marie Kabongo".to_owned(),
            client_email: Some("marie@example.com".to_owned()),
            client_phone: None,
            company_name: "TechStart RDC".to_owned(),
            services: vec!["Site Vitrine".to_owned()],
            total_usd: 400,
            total_fc: 880_000,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_records_quotes() {
        let backend = RecordingBackend::default();
        backend.record_quote(&submission()).await.unwrap();
        let quotes = backend.quotes();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].client_name, "Marie Kabongo");
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let backend = RecordingBackend::default();
        backend.fail_with(ErrorKind::Network);

        let err = backend.record_quote(&submission()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(backend.quotes().is_empty());

        backend.succeed();
        backend.record_quote(&submission()).await.unwrap();
        assert_eq!(backend.quotes().len(), 1);
    }

    #[tokio::test]
    async fn test_receipt_message() {
        let backend = RecordingBackend::default();
        backend.set_receipt_message("Votre message a été envoyé.");
        let receipt = backend
            .send_contact(&ContactForm {
                name: "Patrick".to_owned(),
                email: "patrick@example.com".to_owned(),
                phone: None,
                message: "Bonjour".to_owned(),
            })
            .await
            .unwrap();
        assert_eq!(receipt.message, "Votre message a été envoyé.");
    }
}
