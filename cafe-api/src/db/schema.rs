//! `menu_items` table definition
//!
//! Created when absent, never altered afterwards.

use sqlx::SqlitePool;

const STATEMENTS: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS menu_items (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        name         VARCHAR(100) NOT NULL,
        price        FLOAT NOT NULL,
        is_available BOOLEAN NOT NULL DEFAULT 1,
        category     VARCHAR(50)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_menu_items_id ON menu_items (id)",
    "CREATE UNIQUE INDEX IF NOT EXISTS ix_menu_items_name ON menu_items (name)",
];

/// Create the table and its indexes if they do not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("menu_items schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        crate::db::connect("sqlite::memory:", 1).await.unwrap()
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'menu_items'")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert_eq!(tables.len(), 1);
    }

    #[tokio::test]
    async fn test_columns() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();

        let columns: Vec<(String, i64)> = sqlx::query_as(
            "SELECT name, \"notnull\" FROM pragma_table_info('menu_items') ORDER BY cid",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(
            columns,
            vec![
                ("id".to_string(), 0),
                ("name".to_string(), 1),
                ("price".to_string(), 1),
                ("is_available".to_string(), 1),
                ("category".to_string(), 0),
            ]
        );
    }
}
