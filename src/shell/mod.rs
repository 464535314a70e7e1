// Composition root for the time_entries bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the in-memory store and user directory.
// - Wire them into use case handlers and expose HTTP and GraphQL routers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
