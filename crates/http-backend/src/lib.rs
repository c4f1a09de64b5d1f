//! A [`Backend`] implementation that talks to the real API server.

#[macro_use]
extern crate tracing;

mod config;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use julia_backend::{
    Backend, BackendError, ContactForm, ErrorKind, QuoteForm,
    QuoteSubmission, Receipt,
};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use config::{HttpBackendConfig, HttpBackendConfigBuilder};

/// Error type for [`HttpBackend`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl BackendError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// HTTP backend for the quote-recording API.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    config: Arc<HttpBackendConfig>,
}

impl HttpBackend {
    /// Creates a new `HttpBackend` with the given configuration.
    #[inline]
    pub fn new(config: HttpBackendConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    fn post<B: Serialize>(
        &self,
        route: &str,
        body: &B,
    ) -> impl Future<Output = Result<reqwest::Response, Error>> + Send + 'static
    {
        let url = format!("{}{}", self.config.base_url, route);
        let resp_fut = self.client.post(&url).json(body).send();

        async move {
            trace!("posting to {url}");
            let resp = match resp_fut.await {
                Ok(resp) => resp,
                Err(err) => {
                    error!("request to {url} failed: {err}");
                    return Err(Error::new(
                        format!("{err}"),
                        ErrorKind::Network,
                    ));
                }
            };

            let status = resp.status();
            if !status.is_success() {
                return Err(Error::new(
                    format!("server answered {status} for {url}"),
                    ErrorKind::Rejected,
                ));
            }
            Ok(resp)
        }
    }

    fn post_for_receipt<B: Serialize>(
        &self,
        route: &str,
        body: &B,
    ) -> impl Future<Output = Result<Receipt, Error>> + Send + 'static {
        let resp_fut = self.post(route, body);
        async move { read_json(resp_fut.await?).await }
    }
}

async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    resp.json()
        .await
        .map_err(|err| Error::new(format!("{err}"), ErrorKind::Other))
}

impl Backend for HttpBackend {
    type Error = Error;

    fn record_quote(
        &self,
        submission: &QuoteSubmission,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'static {
        // Success is any 2xx; the response body is not consumed.
        let resp_fut = self.post("/api/quotes", submission);
        async move {
            resp_fut.await?;
            Ok(())
        }
    }

    fn send_contact(
        &self,
        form: &ContactForm,
    ) -> impl Future<Output = Result<Receipt, Self::Error>> + Send + 'static
    {
        self.post_for_receipt("/api/contact", form)
    }

    fn send_quote_form(
        &self,
        form: &QuoteForm,
    ) -> impl Future<Output = Result<Receipt, Self::Error>> + Send + 'static
    {
        self.post_for_receipt("/api/quote", form)
    }
}
