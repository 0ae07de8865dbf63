// Response Store and the endpoint that feeds it.
// Report generation reads back through `ResponseStore::list_by_candidate`.

pub mod handlers;
pub mod store;
