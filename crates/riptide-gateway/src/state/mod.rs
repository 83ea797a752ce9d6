//! Session state mirror

mod store;

pub use store::SessionState;
