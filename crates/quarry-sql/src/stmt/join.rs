use super::Query;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
}

/// A join clause.
///
/// Any occurrence of [`Join::PARENT_TABLE`] in the clause is replaced with
/// the owning query's table name when the statement is rendered, so the same
/// join can be reused under differently named root tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub alias: Option<String>,
    pub on: String,
}

/// How a nested query attaches to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRelation {
    pub kind: JoinKind,

    /// Column of the nested query's table
    pub column: String,

    /// Column of the parent query's table
    pub parent_column: String,
}

/// A nested query flattened into a join clause at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedQuery {
    pub query: Query,
    pub relation: JoinRelation,
}

impl Join {
    /// Placeholder for the owning query's table name.
    pub const PARENT_TABLE: &'static str = "{{PARENT_TABLE}}";

    pub fn new(kind: JoinKind, table: impl Into<String>, on: impl Into<String>) -> Join {
        Join {
            kind,
            table: table.into(),
            alias: None,
            on: on.into(),
        }
    }

    pub fn inner(table: impl Into<String>, on: impl Into<String>) -> Join {
        Join::new(JoinKind::Inner, table, on)
    }

    pub fn left(table: impl Into<String>, on: impl Into<String>) -> Join {
        Join::new(JoinKind::Left, table, on)
    }

    pub fn right(table: impl Into<String>, on: impl Into<String>) -> Join {
        Join::new(JoinKind::Right, table, on)
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Join {
        self.alias = Some(alias.into());
        self
    }
}

impl JoinRelation {
    pub fn new(
        kind: JoinKind,
        column: impl Into<String>,
        parent_column: impl Into<String>,
    ) -> JoinRelation {
        JoinRelation {
            kind,
            column: column.into(),
            parent_column: parent_column.into(),
        }
    }
}

impl JoinedQuery {
    /// Builds the join clause for this nested query.
    ///
    /// The nested query's predicate, when present, extends the `ON`
    /// condition.
    pub fn to_join(&self) -> Join {
        let mut on = format!(
            "{}.{}={}",
            self.query.table_or_alias(),
            self.relation.column,
            Query::format_joined_column(&self.relation.parent_column)
        );

        let filter = self.query.filter.trim();
        if !filter.is_empty() {
            on.push(' ');
            on.push_str(filter);
        }

        Join {
            kind: self.relation.kind,
            table: self.query.table.clone(),
            alias: self.query.alias.clone(),
            on,
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
        })
    }
}
