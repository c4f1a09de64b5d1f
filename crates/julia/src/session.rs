use julia_backend::Backend;
use julia_catalog::Service;
use julia_core::{
    ChatOption, Widget, WidgetBuilder, WidgetEvent, WidgetSnapshot,
};
use julia_http_backend::{HttpBackend, HttpBackendConfigBuilder};

/// A session builder.
///
/// See [`Session`].
pub struct SessionBuilder {
    widget_builder: WidgetBuilder,
}

impl SessionBuilder {
    /// Creates a session builder with a specified backend.
    pub fn with_backend<B: Backend + 'static>(backend: B) -> Self {
        Self {
            widget_builder: WidgetBuilder::with_backend(backend),
        }
    }

    /// Creates a session builder talking to the API server at `base_url`.
    pub fn with_backend_url<S: Into<String>>(base_url: S) -> Self {
        let config = HttpBackendConfigBuilder::new()
            .with_base_url(base_url)
            .build();
        Self::with_backend(HttpBackend::new(config))
    }

    /// Attaches a callback to be invoked for every widget event.
    #[inline]
    pub fn on_event(
        mut self,
        on_event: impl Fn(WidgetEvent) + Send + Sync + 'static,
    ) -> Self {
        self.widget_builder = self.widget_builder.on_event(on_event);
        self
    }

    /// Builds a new session.
    pub fn build(self) -> Session {
        Session {
            widget: self.widget_builder.build(),
        }
    }
}

/// A chat session, like a window that displays messages and has an input
/// box.
///
/// The session holds a fully configured widget that you can use directly,
/// and it is basically a wrapper around [`Widget`].
pub struct Session {
    widget: Widget,
}

impl Session {
    /// Opens the session window.
    #[inline]
    pub fn open(&self) {
        self.widget.open();
    }

    /// Closes the session window.
    #[inline]
    pub fn close(&self) {
        self.widget.close();
    }

    /// Sends a free-text message to the session.
    #[inline]
    pub fn send_message(&self, message: &str) {
        self.widget.send_text(message);
    }

    /// Clicks one of the option buttons offered by the assistant.
    #[inline]
    pub fn select_option(&self, option: ChatOption) {
        self.widget.select_option(option);
    }

    /// Toggles a service in the quote selection.
    #[inline]
    pub fn toggle_service(&self, service: Service) {
        self.widget.toggle_service(service);
    }

    /// Confirms the quote selection.
    #[inline]
    pub fn confirm_quote(&self) {
        self.widget.confirm_quote();
    }

    /// Takes a snapshot of the session state.
    #[inline]
    pub async fn snapshot(&self) -> WidgetSnapshot {
        self.widget.snapshot().await
    }
}
