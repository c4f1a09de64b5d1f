use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The flat contact form, as posted to `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactForm {
    /// Full name of the sender.
    pub name: String,
    /// Email address of the sender.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// The message body.
    pub message: String,
}

/// The flat quote-request form, as posted to `POST /api/quote`.
///
/// This is the simpler flow outside the chat widget: one preselected
/// service and a project description.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteForm {
    /// Full name of the sender.
    pub name: String,
    /// Email address of the sender.
    pub email: String,
    /// Identifier of the desired service.
    pub service: String,
    /// The project description.
    pub message: String,
}

/// The `{message}` success body returned by the form endpoints.
///
/// The message is surfaced to the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Receipt {
    /// The confirmation text from the server.
    pub message: String,
}

/// A required form field was left empty.
///
/// Raised by the client-side check; no request is issued when a form
/// fails validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MissingFieldError {
    field: &'static str,
}

impl MissingFieldError {
    /// The name of the missing field.
    #[inline]
    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl Display for MissingFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "required field `{}` is empty", self.field)
    }
}

impl Error for MissingFieldError {}

fn require(field: &'static str, value: &str) -> Result<(), MissingFieldError> {
    if value.trim().is_empty() {
        Err(MissingFieldError { field })
    } else {
        Ok(())
    }
}

impl ContactForm {
    /// Checks the required fields, returning the first missing one.
    ///
    /// `phone` is the only optional field.
    pub fn validate(&self) -> Result<(), MissingFieldError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("message", &self.message)
    }
}

impl QuoteForm {
    /// Checks the required fields, returning the first missing one.
    pub fn validate(&self) -> Result<(), MissingFieldError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("service", &self.service)?;
        require("message", &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_requires_email() {
        let form = ContactForm {
            name: "Patrick Mukendi".to_owned(),
            email: String::new(),
            phone: None,
            message: "Bonjour".to_owned(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_contact_form_phone_is_optional() {
        let form = ContactForm {
            name: "Patrick Mukendi".to_owned(),
            email: "patrick@example.com".to_owned(),
            phone: None,
            message: "Bonjour".to_owned(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_quote_form_blank_service() {
        let form = QuoteForm {
            name: "Sophie Ilunga".to_owned(),
            email: "sophie@example.com".to_owned(),
            service: "   ".to_owned(),
            message: "Un site pour mon commerce".to_owned(),
        };
        assert_eq!(form.validate().unwrap_err().field(), "service");
    }
}
