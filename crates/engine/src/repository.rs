//! Storage gateway for expenses.
//!
//! [`GastoRepository`] is the seam between the engine and the store;
//! [`GastoStore`] implements it on top of a sea-orm connection. Every method
//! runs a single statement.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, prelude::*,
    sea_query::Expr,
};

use crate::{
    EngineError, ResultEngine,
    gasto::{self, Gasto},
};

const MAX_BOUND: u64 = i64::MAX as u64;

/// Access to persisted expenses.
#[async_trait]
pub trait GastoRepository: Send + Sync {
    /// Return the expense with the given identifier.
    async fn get(&self, id: i64) -> ResultEngine<Gasto>;
    /// Return the number of stored expenses.
    async fn count(&self) -> ResultEngine<u64>;
    /// Return every expense, ordered by identifier.
    async fn get_all(&self) -> ResultEngine<Vec<Gasto>>;
    /// Store a new expense and return the identifier the store assigned.
    async fn create(&self, gasto: &Gasto) -> ResultEngine<i64>;
    /// Overwrite every field of the expense with `gasto.id`.
    async fn update(&self, gasto: &Gasto) -> ResultEngine<()>;
    /// Remove the expense with the given identifier.
    async fn delete(&self, id: i64) -> ResultEngine<()>;
    /// Return at most `limit` expenses ordered by identifier, skipping the
    /// first `offset`.
    async fn query(&self, offset: u64, limit: u64) -> ResultEngine<Vec<Gasto>>;
}

/// [`GastoRepository`] backed by the `gasto` table.
#[derive(Clone, Debug)]
pub struct GastoStore {
    database: DatabaseConnection,
}

impl GastoStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

#[async_trait]
impl GastoRepository for GastoStore {
    async fn get(&self, id: i64) -> ResultEngine<Gasto> {
        gasto::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Gasto::from)
            .ok_or_else(|| EngineError::gasto_not_found(id))
    }

    async fn count(&self) -> ResultEngine<u64> {
        Ok(gasto::Entity::find().count(&self.database).await?)
    }

    async fn get_all(&self) -> ResultEngine<Vec<Gasto>> {
        let models = gasto::Entity::find()
            .order_by_asc(gasto::Column::Id)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Gasto::from).collect())
    }

    async fn create(&self, record: &Gasto) -> ResultEngine<i64> {
        let result = gasto::Entity::insert(gasto::ActiveModel::from(record))
            .exec(&self.database)
            .await?;

        Ok(result.last_insert_id)
    }

    async fn update(&self, record: &Gasto) -> ResultEngine<()> {
        let result = gasto::Entity::update_many()
            .col_expr(
                gasto::Column::Descripcion,
                Expr::value(record.descripcion.clone()),
            )
            .col_expr(gasto::Column::Monto, Expr::value(record.monto))
            .col_expr(gasto::Column::Fecha, Expr::value(record.fecha.clone()))
            .col_expr(gasto::Column::Categoria, Expr::value(record.categoria.clone()))
            .col_expr(gasto::Column::TipoPago, Expr::value(record.tipo_pago.clone()))
            .col_expr(gasto::Column::Comercio, Expr::value(record.comercio.clone()))
            .filter(gasto::Column::Id.eq(record.id))
            .exec(&self.database)
            .await?;

        if result.rows_affected == 0 {
            return Err(EngineError::gasto_not_found(record.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> ResultEngine<()> {
        let result = gasto::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;

        if result.rows_affected == 0 {
            return Err(EngineError::gasto_not_found(id));
        }

        Ok(())
    }

    async fn query(&self, offset: u64, limit: u64) -> ResultEngine<Vec<Gasto>> {
        // Drivers bind OFFSET and LIMIT as signed 64-bit integers.
        let models = gasto::Entity::find()
            .order_by_asc(gasto::Column::Id)
            .offset(offset.min(MAX_BOUND))
            .limit(limit.min(MAX_BOUND))
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Gasto::from).collect())
    }
}
