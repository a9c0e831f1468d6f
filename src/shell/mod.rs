// Composition root for the events service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory event store.
// - Wire the store into the HTTP router.

pub mod config;
pub mod http;
pub mod query;
pub mod state;
