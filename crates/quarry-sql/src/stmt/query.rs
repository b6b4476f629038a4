use super::{Join, JoinRelation, JoinedQuery, Limit, Literal};
use crate::projection;

use indexmap::IndexMap;
use quarry_core::Schema;

/// Describes a single statement without any SQL text.
///
/// The same intent can be rendered as any [`StatementKind`]; each kind reads
/// only the fields relevant to it.
///
/// [`StatementKind`]: super::StatementKind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub table: String,
    pub alias: Option<String>,

    /// Raw column expressions, qualified at render time
    pub columns: Vec<String>,

    pub joins: Vec<Join>,

    /// Nested queries rendered as additional joins
    pub joined: IndexMap<String, JoinedQuery>,

    /// Predicate fragment, such as `AND id > 5`. Always rendered after the
    /// `WHERE 1` sentinel.
    pub filter: String,

    pub order_by: Option<String>,
    pub group_by: Option<String>,
    pub limit: Option<u64>,

    /// Zero-based page; only used when `limit` is set
    pub page: Option<u64>,

    /// Column assignments for INSERT and UPDATE
    pub data: IndexMap<String, Literal>,
}

impl Query {
    pub fn new(table: impl Into<String>) -> Query {
        Query {
            table: table.into(),
            ..Query::default()
        }
    }

    /// Creates a query over the schema's table that selects every column the
    /// schema projects.
    pub fn for_schema(schema: &Schema) -> Query {
        Query::new(schema.table_name()).columns(projection::project(schema))
    }

    /// Renders a parent-table column reference for a nested query's join
    /// condition.
    pub fn format_joined_column(column: &str) -> String {
        format!("{}.{}", Join::PARENT_TABLE, column)
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Query {
        self.alias = Some(alias.into());
        self
    }

    /// Name columns are qualified with.
    pub fn table_or_alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    pub fn column(mut self, column: impl Into<String>) -> Query {
        self.columns.push(column.into());
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Query {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn join(mut self, join: Join) -> Query {
        self.joins.push(join);
        self
    }

    /// Joins a nested query. A later query under the same key replaces the
    /// earlier one.
    pub fn join_query(
        mut self,
        key: impl Into<String>,
        query: Query,
        relation: JoinRelation,
    ) -> Query {
        self.joined
            .insert(key.into(), JoinedQuery { query, relation });
        self
    }

    /// Replaces the predicate fragment.
    pub fn filter(mut self, filter: impl Into<String>) -> Query {
        self.filter = filter.into();
        self
    }

    /// Appends `AND <condition>` to the predicate.
    pub fn and(mut self, condition: impl AsRef<str>) -> Query {
        if !self.filter.is_empty() {
            self.filter.push(' ');
        }
        self.filter.push_str("AND ");
        self.filter.push_str(condition.as_ref());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Query {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn group_by(mut self, group_by: impl Into<String>) -> Query {
        self.group_by = Some(group_by.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Query {
        self.limit = Some(limit);
        self
    }

    pub fn page(mut self, page: u64) -> Query {
        self.page = Some(page);
        self
    }

    /// Sets one column assignment.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Literal>) -> Query {
        self.data.insert(column.into(), value.into());
        self
    }

    /// Replaces the column assignments, typically with the output of
    /// [`Coercer::prepare`](crate::Coercer::prepare).
    pub fn data(mut self, data: IndexMap<String, Literal>) -> Query {
        self.data = data;
        self
    }

    pub fn has_order(&self) -> bool {
        self.order_by.is_some()
    }

    pub fn has_group_by(&self) -> bool {
        self.group_by.is_some()
    }

    /// The LIMIT clause, present only when a limit is set.
    pub fn pagination(&self) -> Option<Limit> {
        self.limit.map(|limit| Limit::new(limit, self.page))
    }
}
