#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

// Fragment serializers
mod join;
mod statement;
mod value;

use crate::{
    column,
    stmt::{
        Assignment, Count, Delete, Insert, Join, Query, Select, Statement, StatementKind, Update,
    },
};

/// Renders query intents as MySQL statements.
///
/// Rendering happens in two steps. [`Serializer::statement`] resolves the
/// intent into clause structs: columns are qualified, joins are rendered and
/// the parent-table placeholder is substituted. [`Serializer::serialize`]
/// then turns those clauses into SQL text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    /// Renders `query` as a statement of the given kind.
    pub fn render(&self, query: &Query, kind: &StatementKind) -> String {
        self.serialize(&self.statement(query, kind))
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };
        stmt.to_sql(&mut fmt);

        if stmt.as_select().is_some() {
            ret = ret.replace("DISTINCT DISTINCT", "DISTINCT");
        }

        ret
    }

    /// Resolves the parts of `query` that `kind` reads into clause structs.
    pub fn statement(&self, query: &Query, kind: &StatementKind) -> Statement {
        match kind {
            StatementKind::Select | StatementKind::SelectDistinct => Select {
                distinct: matches!(kind, StatementKind::SelectDistinct),
                columns: self.columns(query),
                table: query.table.clone(),
                alias: query.alias.clone(),
                joins: self.joins(query),
                filter: query.filter.clone(),
                order_by: query.order_by.clone(),
                group_by: query.group_by.clone(),
                limit: query.pagination(),
            }
            .into(),
            StatementKind::Count { field } => Count {
                field: field.clone(),
                table: query.table.clone(),
                alias: query.alias.clone(),
                joins: self.joins(query),
                filter: query.filter.clone(),
            }
            .into(),
            StatementKind::Insert => Insert {
                table: query.table.clone(),
                assignments: self.assignments(query),
            }
            .into(),
            StatementKind::Update => Update {
                table: query.table.clone(),
                assignments: self.assignments(query),
                filter: query.filter.clone(),
            }
            .into(),
            StatementKind::Delete => Delete {
                table: query.table.clone(),
                filter: query.filter.clone(),
            }
            .into(),
        }
    }

    fn columns(&self, query: &Query) -> Vec<String> {
        let table = query.table_or_alias();
        query
            .columns
            .iter()
            .map(|column| column::normalize(column, table))
            .collect()
    }

    /// Explicit joins first, then one per nested query, in insertion order.
    fn joins(&self, query: &Query) -> Vec<String> {
        let nested = query.joined.values().map(|joined| joined.to_join());

        query
            .joins
            .iter()
            .cloned()
            .chain(nested)
            .map(|join| self.join(&join).replace(Join::PARENT_TABLE, &query.table))
            .collect()
    }

    fn join(&self, join: &Join) -> String {
        let mut ret = String::new();
        join.to_sql(&mut Formatter { dst: &mut ret });
        ret
    }

    fn assignments(&self, query: &Query) -> Vec<Assignment> {
        if query.data.is_empty() {
            tracing::warn!(table = %query.table, "rendering a statement with no assignments");
        }

        query
            .data
            .iter()
            .map(|(column, value)| Assignment {
                column: column.clone(),
                value: value.clone(),
            })
            .collect()
    }
}
