use crate::shared::infrastructure::build_store::BuildStore;
use crate::shared::infrastructure::build_store::in_memory::InMemoryBuildStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> (Arc<InMemoryBuildStore>, AppState) {
    let store = Arc::new(InMemoryBuildStore::new());
    let state = AppState::new(store.clone() as Arc<dyn BuildStore>);
    (store, state)
}
