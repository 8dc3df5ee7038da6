// Composition root for the users API.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and event bus.
// - Wire them into the GraphQL schema and the HTTP router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
