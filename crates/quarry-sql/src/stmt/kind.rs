use quarry_core::Error;

use std::str::FromStr;

/// The kind of statement to render from a [`Query`](super::Query).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    SelectDistinct,

    /// `COUNT(DISTINCT field)`
    Count {
        field: String,
    },

    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn count(field: impl Into<String>) -> StatementKind {
        StatementKind::Count {
            field: field.into(),
        }
    }
}

impl FromStr for StatementKind {
    type Err = Error;

    /// Parses the legacy kind names.
    ///
    /// `count` is rejected since it needs a counted field; build it with
    /// [`StatementKind::count`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(StatementKind::Select),
            "selectDistinct" => Ok(StatementKind::SelectDistinct),
            "insert" => Ok(StatementKind::Insert),
            "update" => Ok(StatementKind::Update),
            "delete" => Ok(StatementKind::Delete),
            other => Err(Error::unsupported_statement(other)),
        }
    }
}
