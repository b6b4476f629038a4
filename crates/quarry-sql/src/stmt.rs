mod assignment;
pub use assignment::Assignment;

mod count;
pub use count::Count;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind, JoinRelation, JoinedQuery};

mod kind;
pub use kind::StatementKind;

mod limit;
pub use limit::Limit;

mod literal;
pub use literal::Literal;

mod query;
pub use query::Query;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

pub use quarry_core::stmt::*;

/// A rendered-ready statement, broken into its clauses.
///
/// Produced by [`Serializer::statement`](crate::Serializer::statement) and
/// turned into SQL text by [`Serializer::serialize`](crate::Serializer::serialize).
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Count(Count),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Statement::Select(select) => Some(select),
            _ => None,
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Count> for Statement {
    fn from(value: Count) -> Self {
        Statement::Count(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
