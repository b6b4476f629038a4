#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    /// Counted expression, always wrapped in `DISTINCT`
    pub field: String,
    pub table: String,
    pub alias: Option<String>,
    pub joins: Vec<String>,
    pub filter: String,
}
