use super::Literal;

/// A single `` `column`=value `` pair in an INSERT or UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Literal,
}
