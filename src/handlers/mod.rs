//! HTTP handlers for runs and routes.

pub mod routes;
pub mod runs;
pub use routes::*;
pub use runs::*;
