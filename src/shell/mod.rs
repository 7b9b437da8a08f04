// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the table store adapter.
// - Expose the use cases over HTTP and GraphQL, resolving the caller per request.

pub mod caller;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
