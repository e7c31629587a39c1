use crate::{Engine, Gasto, GastoPatch, GastoRepository, ResultEngine};

impl<R: GastoRepository> Engine<R> {
    /// Return the expense with the given identifier.
    ///
    /// A missing row is reported as [`KeyNotFound`]; store failures stay
    /// [`Database`] so callers can tell them apart.
    ///
    /// [`KeyNotFound`]: crate::EngineError::KeyNotFound
    /// [`Database`]: crate::EngineError::Database
    pub async fn get(&self, id: i64) -> ResultEngine<Gasto> {
        self.repository.get(id).await
    }

    /// Return the number of stored expenses.
    pub async fn count(&self) -> ResultEngine<u64> {
        self.repository.count().await
    }

    /// Return every stored expense.
    pub async fn get_all(&self) -> ResultEngine<Vec<Gasto>> {
        self.repository.get_all().await
    }

    /// Return one page of expenses ordered by identifier.
    pub async fn query(&self, offset: u64, limit: u64) -> ResultEngine<Vec<Gasto>> {
        self.repository.query(offset, limit).await
    }

    /// Store a new expense and return it as persisted.
    ///
    /// Any identifier on `gasto` is ignored; the store assigns one.
    pub async fn create(&self, gasto: Gasto) -> ResultEngine<Gasto> {
        let id = self.repository.create(&gasto).await?;
        tracing::debug!(id, "gasto created");

        self.repository.get(id).await
    }

    /// Apply a partial update and return the expense as persisted.
    ///
    /// Fields left as `None` in `patch` keep their stored value. Nothing is
    /// written when the expense does not exist.
    pub async fn update(&self, id: i64, patch: GastoPatch) -> ResultEngine<Gasto> {
        let current = self.repository.get(id).await?;
        let merged = patch.apply(current);

        self.repository.update(&merged).await?;
        tracing::debug!(id, "gasto updated");

        self.repository.get(id).await
    }

    /// Remove an existing expense.
    pub async fn delete(&self, id: i64) -> ResultEngine<()> {
        self.repository.get(id).await?;
        self.repository.delete(id).await?;
        tracing::debug!(id, "gasto deleted");

        Ok(())
    }
}
