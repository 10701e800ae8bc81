use crate::shared::AccessOptions;
use crate::store::RecordStore;
use std::sync::Arc;

/// Geteilter Zustand aller Handler.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn RecordStore>,
    pub access: Arc<AccessOptions>,
}

impl ServerState {
    pub fn new(store: Arc<dyn RecordStore>, access: AccessOptions) -> Self {
        Self {
            store,
            access: Arc::new(access),
        }
    }
}
