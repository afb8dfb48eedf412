use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}
