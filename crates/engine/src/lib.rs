pub use error::EngineError;
pub use gasto::{Gasto, GastoPatch};
pub use repository::{GastoRepository, GastoStore};
use sea_orm::DatabaseConnection;

mod error;
pub mod gasto;
mod repository;
mod service;

type ResultEngine<T> = Result<T, EngineError>;

/// Expense use cases on top of a [`GastoRepository`].
///
/// The engine holds no state of its own: every operation goes to the
/// repository and every mutation is followed by a fresh read, so callers
/// always get what the store actually persisted.
#[derive(Debug)]
pub struct Engine<R = GastoStore> {
    repository: R,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

impl<R: GastoRepository> Engine<R> {
    /// Build an engine over an arbitrary repository.
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            repository: GastoStore::new(self.database),
        })
    }
}
