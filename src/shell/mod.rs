// Composition root for the events service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the event store.
// - Wire the store into the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
