use std::pin::Pin;
use std::sync::Arc;

use julia_backend::{
    Backend, BackendError, ContactForm, QuoteForm, QuoteSubmission, Receipt,
};

type OpResult<T> = Result<T, Box<dyn BackendError>>;
type BoxedOpFuture<T> = Pin<Box<dyn Future<Output = OpResult<T>> + Send>>;
#[rustfmt::skip]
type HandlerFn<In, Out> = Arc<
    dyn Fn(In) -> BoxedOpFuture<Out> + Send + Sync
>;

/// A type-erased wrapper around a [`Backend`] implementation.
///
/// The engine doesn't have a generic parameter for the backend and we
/// don't want it either, so the concrete type is erased here and errors
/// are boxed behind the [`BackendError`] trait.
#[derive(Clone)]
pub struct BackendClient {
    record_quote_fn: HandlerFn<QuoteSubmission, ()>,
    send_contact_fn: HandlerFn<ContactForm, Receipt>,
    send_quote_form_fn: HandlerFn<QuoteForm, Receipt>,
}

impl BackendClient {
    /// Wraps a concrete backend.
    pub fn new<B: Backend + 'static>(backend: B) -> Self {
        let backend = Arc::new(backend);

        let record_quote_fn: HandlerFn<QuoteSubmission, ()> = {
            let backend = Arc::clone(&backend);
            Arc::new(move |submission| {
                let fut = backend.record_quote(&submission);
                Box::pin(async move { fut.await.map_err(box_err) })
            })
        };
        let send_contact_fn: HandlerFn<ContactForm, Receipt> = {
            let backend = Arc::clone(&backend);
            Arc::new(move |form| {
                let fut = backend.send_contact(&form);
                Box::pin(async move { fut.await.map_err(box_err) })
            })
        };
        let send_quote_form_fn: HandlerFn<QuoteForm, Receipt> = {
            let backend = Arc::clone(&backend);
            Arc::new(move |form| {
                let fut = backend.send_quote_form(&form);
                Box::pin(async move { fut.await.map_err(box_err) })
            })
        };

        Self {
            record_quote_fn,
            send_contact_fn,
            send_quote_form_fn,
        }
    }

    /// Records a finalized quote. Single attempt, no retry.
    #[inline]
    pub async fn record_quote(
        &self,
        submission: QuoteSubmission,
    ) -> OpResult<()> {
        (self.record_quote_fn)(submission).await
    }

    /// Sends a contact-form message.
    #[inline]
    pub async fn send_contact(&self, form: ContactForm) -> OpResult<Receipt> {
        (self.send_contact_fn)(form).await
    }

    /// Sends a simple quote-form request.
    #[inline]
    pub async fn send_quote_form(
        &self,
        form: QuoteForm,
    ) -> OpResult<Receipt> {
        (self.send_quote_form_fn)(form).await
    }
}

#[inline]
fn box_err<E: BackendError>(err: E) -> Box<dyn BackendError> {
    Box::new(err)
}

#[cfg(test)]
mod tests {
    use julia_backend::ErrorKind;
    use julia_test_backend::RecordingBackend;

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
    async fn test_erased_calls_reach_backend() {
        let backend = RecordingBackend::default();
        let client = BackendClient::new(backend.clone());

        client.record_quote(submission()).await.unwrap();
        assert_eq!(backend.quotes().len(), 1);
    }

    #[tokio::test]
    async fn test_error_kind_survives_erasure() {
        let backend = RecordingBackend::default();
        backend.fail_with(ErrorKind::Network);
        let client = BackendClient::new(backend);

        let err = client.record_quote(submission()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}
