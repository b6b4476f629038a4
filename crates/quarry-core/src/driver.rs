mod response;
pub use response::Response;

use crate::{async_trait, Result};

use std::fmt::Debug;

/// Opens connections to a database.
///
/// Connectors call [`Driver::connect`] lazily, the first time a statement
/// needs to reach the backend.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection able to run raw SQL text.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a statement, returning its rows or, for statements that do not
    /// produce a row set, the number of affected rows.
    async fn exec(&mut self, sql: &str) -> Result<Response>;

    /// Id generated by the most recent insert on this connection.
    fn last_insert_id(&self) -> u64;
}
