use super::{Formatter, ToSql};
use crate::stmt::{Join, JoinKind};

impl ToSql for JoinKind {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}

impl ToSql for &Join {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let alias = self.alias.as_ref().map(|alias| (" AS ", alias));
        fmt!(f, self.kind " JOIN " self.table.as_str() alias " ON " self.on.as_str());
    }
}
