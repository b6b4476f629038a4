/// `LIMIT [offset, ]limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub offset: Option<u64>,
    pub limit: u64,
}

impl Limit {
    /// Computes the limit clause for a zero-based page of `limit` rows.
    ///
    /// Offsets past `u64::MAX` are clamped to it.
    pub fn new(limit: u64, page: Option<u64>) -> Limit {
        Limit {
            offset: page.map(|page| page.saturating_mul(limit)),
            limit,
        }
    }
}
