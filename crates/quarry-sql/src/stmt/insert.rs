use super::Assignment;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub assignments: Vec<Assignment>,
}
