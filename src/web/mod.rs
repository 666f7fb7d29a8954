//! HTTP API for browser front-ends.
//!
//! Only compiled with the `web` feature.

mod server;

pub use server::*;
