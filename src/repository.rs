//! Entity-level operations over the store: list, upsert, delete.
//!
//! Upsert rule, shared by runs and routes: an entity without an id is inserted and the store
//! assigns its row id; an entity with an id overwrites every field of that row. The update is
//! not preceded by an existence check, so an unknown id affects zero rows and still succeeds.

use crate::error::StoreError;
use crate::model::{RowId, Route, Run};
use crate::sql::Statement;
use crate::store::Store;

/// How an entity kind maps onto its table.
pub trait Persist: Clone {
    fn id(&self) -> Option<RowId>;
    fn with_id(self, id: RowId) -> Self;
    /// INSERT of every field except the id.
    fn insert(&self) -> Statement;
    /// UPDATE of every field keyed by `rowid = id`.
    fn update(&self, id: RowId) -> Statement;
}

impl Persist for Run {
    fn id(&self) -> Option<RowId> {
        self.id
    }

    fn with_id(self, id: RowId) -> Self {
        Run { id: Some(id), ..self }
    }

    fn insert(&self) -> Statement {
        Statement::new("insert into runs(route_id, date, comment, excuses) values(?, ?, ?, ?)")
            .bind(self.route_id)
            .bind(self.date.as_str())
            .bind(self.comment.as_str())
            .bind(self.excuses.as_str())
    }

    fn update(&self, id: RowId) -> Statement {
        Statement::new("update runs set route_id = ?, date = ?, comment = ?, excuses = ? where rowid = ?")
            .bind(self.route_id)
            .bind(self.date.as_str())
            .bind(self.comment.as_str())
            .bind(self.excuses.as_str())
            .bind(id)
    }
}

impl Persist for Route {
    fn id(&self) -> Option<RowId> {
        self.id
    }

    fn with_id(self, id: RowId) -> Self {
        Route { id: Some(id), ..self }
    }

    fn insert(&self) -> Statement {
        Statement::new("insert into routes(name, distance) values(?, ?)")
            .bind(self.name.as_str())
            .bind(self.distance)
    }

    fn update(&self, id: RowId) -> Statement {
        Statement::new("update routes set name = ?, distance = ? where rowid = ?")
            .bind(self.name.as_str())
            .bind(self.distance)
            .bind(id)
    }
}

#[derive(Clone, Debug)]
pub struct Repository {
    store: Store,
}

impl Repository {
    pub fn new(store: Store) -> Self {
        Repository { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn list_runs(&self) -> Result<Vec<Run>, StoreError> {
        let rows: Vec<(i64, String, i64, String, String)> = self
            .store
            .fetch_all("select rowid, date, route_id, comment, excuses from runs order by rowid")
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, date, route_id, comment, excuses)| Run {
                id: Some(RowId(id)),
                date,
                route_id,
                comment,
                excuses,
            })
            .collect())
    }

    pub async fn list_routes(&self) -> Result<Vec<Route>, StoreError> {
        let rows: Vec<(i64, String, i64)> = self
            .store
            .fetch_all("select rowid, name, distance from routes order by rowid")
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name, distance)| Route {
                id: Some(RowId(id)),
                name,
                distance,
            })
            .collect())
    }

    /// Returns the entity as persisted: a fresh insert carries its new row id.
    pub async fn upsert_run(&self, run: Run) -> Result<Run, StoreError> {
        self.upsert(run).await
    }

    pub async fn upsert_route(&self, route: Route) -> Result<Route, StoreError> {
        self.upsert(route).await
    }

    /// Returns the number of rows removed (0 for an unknown id).
    pub async fn delete_run(&self, id: RowId) -> Result<u64, StoreError> {
        let stmt = Statement::new("delete from runs where rowid = ?").bind(id);
        let executed = self.store.with_transaction(&stmt).await?;
        tracing::info!(id = %id, deleted = executed.rows_affected, "run deleted");
        Ok(executed.rows_affected)
    }

    async fn upsert<E: Persist>(&self, entity: E) -> Result<E, StoreError> {
        match entity.id() {
            None => {
                let executed = self.store.with_transaction(&entity.insert()).await?;
                let id = RowId(executed.last_insert_id);
                tracing::info!(id = %id, "inserted");
                Ok(entity.with_id(id))
            }
            Some(id) => {
                let executed = self.store.with_transaction(&entity.update(id)).await?;
                if executed.rows_affected == 0 {
                    tracing::debug!(id = %id, "update matched no row");
                } else {
                    tracing::info!(id = %id, "updated");
                }
                Ok(entity)
            }
        }
    }
}
