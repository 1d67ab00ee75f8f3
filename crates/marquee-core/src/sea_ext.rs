use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, Select,
    sea_query::{Expr, Func},
};

/// Case-insensitive `LIKE '%needle%'` filtering for sea-orm selects.
pub trait ContainsIgnoreCase {
    type Column;

    fn contains_ignore_case(self, column: Self::Column, needle: &str) -> Self;
}

impl<E> ContainsIgnoreCase for Select<E>
where
    E: EntityTrait,
{
    type Column = E::Column;

    fn contains_ignore_case(self, column: E::Column, needle: &str) -> Self {
        let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
        self.filter(
            Expr::expr(Func::lower(Expr::col((column.entity_name(), column)))).like(pattern),
        )
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
