mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

use crate::{cache::CacheEntry, QueryCache};

use quarry_core::{
    driver::{Connection, Driver, Response},
    err,
    stmt::{Rows, Value},
    Error, Result, Schema,
};
use quarry_sql::{projection, stmt::Literal, Coercer, CoercionMode, Query, Serializer, StatementKind};

use indexmap::IndexMap;
use std::sync::Arc;

/// Suffix replaced with the configured language code, e.g. `title_LANG`
/// becomes `title_en`.
const LANG_SUFFIX: &str = "_LANG";

/// A named database connection with a result cache in front of it.
///
/// The connection is opened on first use. `SELECT` statements are answered
/// from the shared [`QueryCache`] when an identical statement already ran on
/// this connector; every other statement always reaches the database.
#[derive(Debug)]
pub struct Connector {
    name: String,

    driver: Box<dyn Driver>,

    /// Open connection, if any
    connection: Option<Box<dyn Connection>>,

    cache: Arc<QueryCache>,

    serializer: Serializer,

    coercer: Coercer,

    /// Language code substituted for `_LANG`
    lang: Option<String>,

    /// When set, selects also store their unpaginated row count in
    /// `@rows_<name>`.
    remember_total: Option<String>,

    /// Skip cache lookups, still storing results
    ignore_cache: bool,

    /// Skip the cache lookup for the next statement only
    force_refresh: bool,
}

impl Connector {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    /// Creates a connector with a private cache and default settings.
    pub fn new(name: impl Into<String>, driver: impl Driver) -> Connector {
        Connector::builder(name).build(driver)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    pub fn coercion(&self) -> CoercionMode {
        self.coercer.mode()
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn set_lang(&mut self, lang: Option<String>) -> &mut Self {
        self.lang = lang;
        self
    }

    /// Opens the connection unless it is already open.
    pub async fn connect(&mut self) -> Result<()> {
        self.connection().await.map(|_| ())
    }

    pub fn disconnect(&mut self) {
        if self.connection.take().is_some() {
            tracing::debug!(connector = %self.name, "disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Runs the next statement against the database even if its result is
    /// cached, then refreshes the cached result.
    pub fn force_refresh(&mut self) -> &mut Self {
        self.force_refresh = true;
        self
    }

    pub fn is_force_refresh(&self) -> bool {
        self.force_refresh
    }

    /// Stops answering statements from the cache until reset.
    pub fn ignore_cache(&mut self, ignore: bool) -> &mut Self {
        self.ignore_cache = ignore;
        self
    }

    /// Makes every select record its total row count in `@rows_<name>`.
    pub fn remember_total(&mut self, name: impl Into<String>) -> &mut Self {
        self.remember_total = Some(name.into());
        self
    }

    pub fn forget_total(&mut self) -> &mut Self {
        self.remember_total = None;
        self
    }

    /// Runs raw SQL.
    ///
    /// Returns the statement's rows, or `None` when it produced no row set.
    /// Cached rows are shared, so two cache hits return the same `Arc`.
    pub async fn query(&mut self, sql: &str) -> Result<CacheEntry> {
        let sql = self.rewrite(sql);
        let is_select = is_select(&sql);

        if is_select && !self.ignore_cache && !self.force_refresh {
            if let Some(entry) = self.cache.get(&self.name, &sql) {
                return Ok(entry);
            }
            tracing::debug!(connector = %self.name, %sql, "cache miss");
        }

        tracing::debug!(connector = %self.name, %sql, "exec");
        let connection = self.connection().await?;
        let response = connection.exec(&sql).await;
        let response =
            response.map_err(|err| err.context(err!("connector `{}`", self.name)))?;

        if self.force_refresh {
            self.force_refresh = false;
            tracing::debug!(connector = %self.name, "force refresh finished");
        }

        if !is_select && self.cache.policy().invalidate_on_write {
            self.cache.invalidate(&self.name);
        }

        let entry = match response {
            Response::Rows(rows) => Some(Arc::new(rows)),
            Response::Done { affected } => {
                tracing::debug!(connector = %self.name, affected, "statement done");
                None
            }
        };

        self.cache.insert(&self.name, &sql, entry.clone());
        Ok(entry)
    }

    /// Renders `query` without running it.
    pub fn render(&self, query: &Query, kind: &StatementKind) -> String {
        self.serializer.render(query, kind)
    }

    pub async fn select(&mut self, query: &Query) -> Result<Arc<Rows>> {
        self.read(query, &StatementKind::Select).await
    }

    pub async fn select_distinct(&mut self, query: &Query) -> Result<Arc<Rows>> {
        self.read(query, &StatementKind::SelectDistinct).await
    }

    /// Counts distinct values of `field` among the rows `query` matches.
    pub async fn count(&mut self, query: &Query, field: impl Into<String>) -> Result<u64> {
        let rows = self.read(query, &StatementKind::count(field)).await?;

        let Some(value) = rows.first().and_then(|row| row.get("Count")) else {
            return Err(Error::invalid_result("count returned no `Count` column"));
        };

        match value {
            Value::I64(count) if *count >= 0 => Ok(*count as u64),
            Value::String(count) => count
                .trim()
                .parse()
                .map_err(|_| Error::invalid_result(format!("`Count` is not a number: {count:?}"))),
            value => Err(Error::invalid_result(format!(
                "unexpected `Count` value of type {}",
                value.type_name()
            ))),
        }
    }

    /// Inserts the query's data, returning the generated id.
    pub async fn insert(&mut self, query: &Query) -> Result<u64> {
        let sql = self.render(query, &StatementKind::Insert);
        self.query(&sql).await?;
        Ok(self.last_inserted_id())
    }

    pub async fn update(&mut self, query: &Query) -> Result<()> {
        let sql = self.render(query, &StatementKind::Update);
        self.query(&sql).await.map(|_| ())
    }

    pub async fn delete(&mut self, query: &Query) -> Result<()> {
        let sql = self.render(query, &StatementKind::Delete);
        self.query(&sql).await.map(|_| ())
    }

    /// Coerces a mutation payload into column assignments using this
    /// connector's coercion mode.
    pub fn prepare_data(
        &self,
        schema: &Schema,
        data: IndexMap<String, Value>,
    ) -> Result<IndexMap<String, Literal>> {
        self.coercer.prepare(schema, data)
    }

    /// Projection of every column the schema stores in its own table.
    pub fn extract_schema_columns(&self, schema: &Schema) -> Vec<String> {
        projection::project(schema)
    }

    /// Id generated by the last insert, or 0 when not connected.
    pub fn last_inserted_id(&self) -> u64 {
        self.connection
            .as_ref()
            .map(|connection| connection.last_insert_id())
            .unwrap_or(0)
    }

    async fn read(&mut self, query: &Query, kind: &StatementKind) -> Result<Arc<Rows>> {
        let sql = self.render(query, kind);
        match self.query(&sql).await? {
            Some(rows) => Ok(rows),
            None => Err(Error::invalid_result(format!(
                "statement returned no row set: {sql}"
            ))),
        }
    }

    async fn connection(&mut self) -> Result<&mut Box<dyn Connection>> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => {
                let connection = self
                    .driver
                    .connect()
                    .await
                    .map_err(|err| err.context(err!("connector `{}` failed to connect", self.name)))?;
                tracing::debug!(connector = %self.name, "connected");
                connection
            }
        };

        Ok(self.connection.insert(connection))
    }

    fn rewrite(&self, sql: &str) -> String {
        let mut sql = match &self.lang {
            Some(lang) => sql.replace(LANG_SUFFIX, &format!("_{lang}")),
            None => sql.to_string(),
        };

        if let Some(name) = &self.remember_total {
            if let Some(start) = sql.to_ascii_lowercase().find("select") {
                sql.replace_range(start..start + "select".len(), "SELECT SQL_CALC_FOUND_ROWS");
            }
            sql.push_str(&format!("; SET @rows_{name} = FOUND_ROWS();"));
        }

        sql.trim().to_string()
    }
}

/// Only statements starting with `SELECT`, in any case, are cached.
fn is_select(sql: &str) -> bool {
    sql.get(.."select".len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("select"))
}
