use super::{Formatter, ToSql};
use crate::{escape::escape_string, stmt::Literal};

/// Every literal is single-quoted, numbers included, unless it is a
/// pre-rendered expression.
impl ToSql for &Literal {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let (true, Some(text)) = (self.is_verbatim(), self.as_str()) {
            f.dst.push_str(text);
            return;
        }

        f.dst.push('\'');
        match self {
            Literal::Int(v) => f.dst.push_str(&v.to_string()),
            Literal::Float(v) => f.dst.push_str(&v.to_string()),
            Literal::Text(text) | Literal::Expr(text) => f.dst.push_str(&escape_string(text)),
        }
        f.dst.push('\'');
    }
}
