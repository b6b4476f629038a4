use super::{Comma, Delimited, Formatter, Ident, ToSql};
use crate::stmt::{Assignment, Count, Delete, Insert, Limit, Select, Statement, Update};

/// ` AS alias ` after the primary table, or nothing.
struct TableAlias<'a>(Option<&'a str>);

impl ToSql for TableAlias<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(alias) = self.0 {
            fmt!(f, " AS " alias " ");
        }
    }
}

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let distinct = if self.distinct { "DISTINCT" } else { "" };
        let alias = TableAlias(self.alias.as_deref());
        let joins = Delimited(&self.joins, " ");
        let order_by = self.order_by.as_ref().map(|order_by| (" ORDER BY ", order_by));

        match &self.group_by {
            // Group the ordered, paginated rows instead of ordering the groups.
            Some(group_by) if self.is_nested() => {
                fmt!(
                    f, "SELECT * FROM (SELECT " distinct " " Comma(&self.columns)
                    " FROM " self.table.as_str() alias " " joins
                    " WHERE 1 " self.filter.as_str() " " order_by " " self.limit
                    ") AS tmp_table GROUP BY " group_by
                );
            }
            group_by => {
                let group_by = group_by.as_ref().map(|group_by| (" GROUP BY ", group_by));
                fmt!(
                    f, "SELECT " distinct " " Comma(&self.columns)
                    " FROM " self.table.as_str() alias " " joins
                    " WHERE 1 " self.filter.as_str() " " order_by group_by " " self.limit
                );
            }
        }
    }
}

impl ToSql for Limit {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let offset = self.offset.map(|offset| (offset, ", "));
        fmt!(f, " LIMIT " offset self.limit);
    }
}

impl ToSql for &Count {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let alias = TableAlias(self.alias.as_deref());
        let joins = Delimited(&self.joins, " ");

        fmt!(
            f, "SELECT COUNT(DISTINCT " self.field.as_str() ") AS Count FROM "
            self.table.as_str() alias " " joins " WHERE 1 " self.filter.as_str()
        );
    }
}

impl ToSql for &Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "INSERT INTO " self.table.as_str() " SET " Comma(&self.assignments));
    }
}

impl ToSql for &Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f, "UPDATE " self.table.as_str() " SET " Comma(&self.assignments)
            " WHERE 1 " self.filter.as_str()
        );
    }
}

impl ToSql for &Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "DELETE FROM " self.table.as_str() " WHERE 1 " self.filter.as_str());
    }
}

impl ToSql for &Assignment {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) "=" value);
    }
}
