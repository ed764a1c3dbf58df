//! In-memory form session storage.

mod form_store;

pub use form_store::InMemoryFormStore;
