use std::sync::Arc;

use julia_backend::Backend;

use super::{Widget, WidgetEvent};
use crate::backend_client::BackendClient;

/// [`Widget`] builder.
pub struct WidgetBuilder {
    pub(crate) backend: BackendClient,
    pub(crate) on_event: Option<Arc<dyn Fn(WidgetEvent) + Send + Sync>>,
}

impl WidgetBuilder {
    /// Creates a new builder with the specified backend.
    #[inline]
    pub fn with_backend<B: Backend + 'static>(backend: B) -> Self {
        Self {
            backend: BackendClient::new(backend),
            on_event: None,
        }
    }

    /// Attaches the callback invoked for every [`WidgetEvent`].
    ///
    /// The callback runs on the widget task; keep it cheap and forward
    /// to a channel for anything heavier.
    #[inline]
    pub fn on_event(
        mut self,
        on_event: impl Fn(WidgetEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_event = Some(Arc::new(on_event));
        self
    }

    /// Builds the widget.
    #[inline]
    pub fn build(self) -> Widget {
        Widget::spawn_from_builder(self)
    }
}
