use crate::shared::infrastructure::build_store::BuildStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BuildStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BuildStore>) -> Self {
        Self { store }
    }
}
