// Composition root for the builds service.
//
// Responsibilities
// - Read config from flags and environment.
// - Construct the single build store and hand it to the transports.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
