pub mod config;
pub mod errors;
pub mod graphql;
pub mod server;
pub mod store;
