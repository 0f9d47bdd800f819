//! blogdesk: a blog management application.
//!
//! One binary, two halves: an HTTP API server owning the persistent blog
//! collection, and a terminal dashboard client that mirrors it through a
//! re-fetch-after-every-mutation sync loop.

pub mod client;
pub mod config;
pub mod logging;
pub mod server;
pub mod store;
pub mod ui;
