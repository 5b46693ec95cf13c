//! charforge HTTP server library.
//!
//! Exposes config, state, error handling, the JSON routes and the HTML pages
//! so integration tests and the binary entrypoint share one router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
