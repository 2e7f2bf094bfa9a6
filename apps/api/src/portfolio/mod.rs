// Portfolio core: data model, built-in defaults, cache reconciliation,
// file persistence, and the CRUD handlers.
// Reconciliation runs once at startup; handlers mutate the in-memory profile
// and write it back through the store.

pub mod defaults;
pub mod handlers;
pub mod models;
pub mod reconcile;
pub mod store;
