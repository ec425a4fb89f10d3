//! Run tracker: REST backend recording runs and routes in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, StoreError};
pub use model::{IdContainer, RowId, Route, Run};
pub use repository::{Persist, Repository};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{Executed, Store};
