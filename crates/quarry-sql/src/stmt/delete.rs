#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: String,
}
