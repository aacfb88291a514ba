use crate::db::DbPool;
use crate::docstore::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub docs: DocumentStore,
}
