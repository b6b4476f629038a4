use super::Limit;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Emit `DISTINCT` after `SELECT`
    pub distinct: bool,

    /// Qualified projection expressions
    pub columns: Vec<String>,

    pub table: String,
    pub alias: Option<String>,

    /// Rendered join clauses, with the parent table already substituted
    pub joins: Vec<String>,

    /// Predicate fragment appended after `WHERE 1`
    pub filter: String,

    pub order_by: Option<String>,
    pub group_by: Option<String>,
    pub limit: Option<Limit>,
}

impl Select {
    /// Ordering and grouping together require grouping an ordered,
    /// paginated subquery.
    pub fn is_nested(&self) -> bool {
        self.order_by.is_some() && self.group_by.is_some()
    }
}
