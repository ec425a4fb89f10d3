//! Shared application state for all routes.

use crate::repository::Repository;
use crate::store::Store;

#[derive(Clone, Debug)]
pub struct AppState {
    pub repository: Repository,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            repository: Repository::new(store),
        }
    }

    pub fn store(&self) -> &Store {
        self.repository.store()
    }
}
