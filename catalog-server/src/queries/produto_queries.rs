use sqlx::PgPool;

use crate::{error::Result, models::Produto};

pub async fn list_all(pool: &PgPool) -> Result<Vec<Produto>> {
    // Store-native order; no ORDER BY is imposed.
    let produtos = sqlx::query_as::<_, Produto>("SELECT * FROM produtos")
        .fetch_all(pool)
        .await?;

    Ok(produtos)
}

pub async fn find_by_id(pool: &PgPool, raw_id: &str) -> Result<Option<Produto>> {
    // The path segment arrives untyped; anything that is not an i32 can
    // match no row and never reaches the store.
    let Some(id) = parse_produto_id(raw_id) else {
        return Ok(None);
    };

    let produto = sqlx::query_as::<_, Produto>("SELECT * FROM produtos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(produto)
}

fn parse_produto_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer_ids() {
        assert_eq!(parse_produto_id("1"), Some(1));
        assert_eq!(parse_produto_id(" 42 "), Some(42));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(parse_produto_id("abc"), None);
        assert_eq!(parse_produto_id(""), None);
        assert_eq!(parse_produto_id("1.5"), None);
    }

    #[test]
    fn rejects_sql_shaped_ids() {
        assert_eq!(parse_produto_id("1; DROP TABLE produtos"), None);
        assert_eq!(parse_produto_id("1 OR 1=1"), None);
    }
}
