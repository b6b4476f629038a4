use crate::stmt::Rows;

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Rows returned by a read statement
    Rows(Rows),

    /// The statement ran without producing a row set
    Done { affected: u64 },
}

impl Response {
    pub fn rows(rows: impl Into<Rows>) -> Self {
        Self::Rows(rows.into())
    }

    pub fn done(affected: u64) -> Self {
        Self::Done { affected }
    }
}
