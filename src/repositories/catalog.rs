//! Generic catalog repository
//!
//! [`CatalogRepository`] owns the store handle for one catalog kind and
//! exposes the one-time bootstrap plus the two read operations. The kind
//! supplies its query template, grouping column, default order and seeding
//! routine through [`CatalogKind`].

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement};
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

use crate::error::RepositoryError;
use crate::query::{CatalogFilter, QueryTemplate, compile_filter, compile_order};

/// Static description of one catalog table.
#[async_trait]
pub trait CatalogKind: Send + Sync + 'static {
    /// Row type produced by list/get, including the derived status
    type Item: FromQueryResult + Send + Sync;

    /// Name used in not-found errors and log fields
    const KIND: &'static str;

    const TEMPLATE: QueryTemplate;

    /// Column matched by `CatalogFilter::grouping_ids`
    const GROUPING_COLUMN: &'static str;

    /// Applied when the caller's order spec yields no valid token
    const DEFAULT_ORDER: &'static str;

    /// Inserts `rows` dummy rows; must be safe to run against an already seeded store.
    async fn seed(db: &DatabaseConnection, rows: u32) -> Result<(), DbErr>;
}

/// Repository for one catalog kind.
///
/// `init` runs migrations and seeding at most once per instance. Concurrent
/// callers wait for the first run and all observe its outcome. `list` and
/// `get` may be called concurrently and never mutate the store.
pub struct CatalogRepository<K: CatalogKind> {
    db: Arc<DatabaseConnection>,
    seed_rows: u32,
    init: OnceCell<Result<(), Arc<DbErr>>>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: CatalogKind> std::fmt::Debug for CatalogRepository<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogRepository")
            .field("kind", &K::KIND)
            .field("seed_rows", &self.seed_rows)
            .field("initialized", &self.init.initialized())
            .finish()
    }
}

impl<K: CatalogKind> CatalogRepository<K> {
    /// Creates a repository over `db` that seeds `seed_rows` rows on `init`.
    pub fn new(db: Arc<DatabaseConnection>, seed_rows: u32) -> Self {
        Self {
            db,
            seed_rows,
            init: OnceCell::new(),
            _kind: PhantomData,
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Creates the schema and seeds dummy data, exactly once.
    ///
    /// Later calls return the first run's result without touching the store.
    /// If the first run fails, every call reports that same failure.
    pub async fn init(&self) -> Result<(), RepositoryError> {
        self.init
            .get_or_init(|| async {
                info!(kind = K::KIND, rows = self.seed_rows, "initializing catalog");
                let outcome = async {
                    Migrator::up(&*self.db, None).await?;
                    K::seed(&self.db, self.seed_rows).await
                }
                .await;

                if let Err(err) = &outcome {
                    tracing::error!(kind = K::KIND, error = %err, "catalog initialization failed");
                }
                outcome.map_err(Arc::new)
            })
            .await
            .clone()
            .map_err(RepositoryError::Seed)
    }

    /// Lists rows matching `filter`, ordered by `order_by`.
    ///
    /// Invalid sort tokens are dropped silently; an unknown but well-formed
    /// column surfaces as a store error.
    #[instrument(skip(self, filter), fields(kind = K::KIND))]
    pub async fn list(
        &self,
        filter: Option<&CatalogFilter>,
        order_by: &str,
    ) -> Result<Vec<K::Item>, RepositoryError> {
        let where_clause = compile_filter(filter, K::GROUPING_COLUMN);
        let order_clause = compile_order(order_by, K::DEFAULT_ORDER);
        let sql = K::TEMPLATE.list(&where_clause, &order_clause);
        debug!(%sql, bound = where_clause.values.len(), "listing catalog rows");

        let stmt =
            Statement::from_sql_and_values(self.db.get_database_backend(), sql, where_clause.values);
        let rows = <K::Item as FromQueryResult>::find_by_statement(stmt)
            .all(&*self.db)
            .await?;
        Ok(rows)
    }

    /// Fetches one row by id, or [`RepositoryError::NotFound`].
    #[instrument(skip(self), fields(kind = K::KIND))]
    pub async fn get(&self, id: i64) -> Result<K::Item, RepositoryError> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            K::TEMPLATE.get_by_id(),
            [id.into()],
        );

        <K::Item as FromQueryResult>::find_by_statement(stmt)
            .one(&*self.db)
            .await?
            .ok_or(RepositoryError::NotFound { kind: K::KIND, id })
    }
}
