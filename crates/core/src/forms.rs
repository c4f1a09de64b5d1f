//! The simple form flows outside the chat widget.
//!
//! Both forms are validated locally first; a form with a missing
//! required field is rejected before any network call. On success the
//! server's receipt message is surfaced verbatim; on failure a generic
//! French fallback is shown instead (single attempt, no retry).

use julia_backend::{ContactForm, QuoteForm};

use crate::BackendClient;

const SUBMIT_FAILED: &str =
    "Une erreur est survenue. Veuillez réessayer ou nous contacter \
     directement sur WhatsApp.";

/// The user-visible outcome of a form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// The server accepted the form; contains its receipt message.
    Accepted(String),
    /// A required field is empty; no request was issued.
    Invalid(&'static str),
    /// The request failed; contains the fallback text to show.
    Failed(String),
}

/// Validates and submits the contact form.
pub async fn submit_contact_form(
    client: &BackendClient,
    form: &ContactForm,
) -> FormOutcome {
    if let Err(err) = form.validate() {
        return FormOutcome::Invalid(err.field());
    }
    match client.send_contact(form.clone()).await {
        Ok(receipt) => FormOutcome::Accepted(receipt.message),
        Err(err) => {
            warn!("contact form submission failed: {err}");
            FormOutcome::Failed(SUBMIT_FAILED.to_owned())
        }
    }
}

/// Validates and submits the simple quote form.
pub async fn submit_quote_form(
    client: &BackendClient,
    form: &QuoteForm,
) -> FormOutcome {
    if let Err(err) = form.validate() {
        return FormOutcome::Invalid(err.field());
    }
    match client.send_quote_form(form.clone()).await {
        Ok(receipt) => FormOutcome::Accepted(receipt.message),
        Err(err) => {
            warn!("quote form submission failed: {err}");
            FormOutcome::Failed(SUBMIT_FAILED.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use julia_backend::ErrorKind;
    use julia_test_backend::RecordingBackend;

    use super::*;

    fn contact_form(email: &str) -> ContactForm {
        ContactForm {
            name: "Patrick Mukendi".to_owned(),
            email: email.to_owned(),
            phone: None,
            message: "Bonjour, je souhaite un site web.".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_missing_email_never_reaches_network() {
        let backend = RecordingBackend::default();
        let client = BackendClient::new(backend.clone());

        let outcome = submit_contact_form(&client, &contact_form("")).await;
        assert_eq!(outcome, FormOutcome::Invalid("email"));
        assert!(backend.contacts().is_empty());
    }

    #[tokio::test]
    async fn test_receipt_is_surfaced_verbatim() {
        let backend = RecordingBackend::default();
        backend.set_receipt_message(
            "Votre message a été envoyé avec succès.",
        );
        let client = BackendClient::new(backend.clone());

        let outcome = submit_contact_form(
            &client,
            &contact_form("patrick@example.com"),
        )
        .await;
        assert_eq!(
            outcome,
            FormOutcome::Accepted(
                "Votre message a été envoyé avec succès.".to_owned()
            )
        );
        assert_eq!(backend.contacts().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_shows_fallback() {
        let backend = RecordingBackend::default();
        backend.fail_with(ErrorKind::Rejected);
        let client = BackendClient::new(backend);

        let outcome = submit_contact_form(
            &client,
            &contact_form("patrick@example.com"),
        )
        .await;
        assert!(matches!(outcome, FormOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_quote_form_requires_service() {
        let backend = RecordingBackend::default();
        let client = BackendClient::new(backend.clone());

        let form = QuoteForm {
            name: "Sophie Ilunga".to_owned(),
            email: "sophie@example.com".to_owned(),
            service: String::new(),
            message: "Un site pour mon commerce.".to_owned(),
        };
        let outcome = submit_quote_form(&client, &form).await;
        assert_eq!(outcome, FormOutcome::Invalid("service"));
        assert!(backend.quote_forms().is_empty());
    }
}
