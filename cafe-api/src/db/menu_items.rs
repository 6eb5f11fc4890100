//! Menu item database operations
//!
//! Every operation runs on the caller's connection (one per request).
//! Writes are single statements, so each one commits atomically before
//! the function returns.

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqliteConnection;

use crate::error::DbResult;

/// All stored items, ordered by `id`
pub async fn list(conn: &mut SqliteConnection) -> DbResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price, is_available, category FROM menu_items ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(items)
}

/// Look up one item; `None` when no row has `id`
pub async fn get(conn: &mut SqliteConnection, id: i64) -> DbResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price, is_available, category FROM menu_items WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(item)
}

/// Insert a new item; a duplicate name yields `DbError::ConstraintViolation`
pub async fn create(conn: &mut SqliteConnection, data: &MenuItemCreate) -> DbResult<MenuItem> {
    let item = sqlx::query_as::<_, MenuItem>(
        r#"
        INSERT INTO menu_items (name, price, is_available, category)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, price, is_available, category
        "#,
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.is_available)
    .bind(&data.category)
    .fetch_one(&mut *conn)
    .await?;
    Ok(item)
}

/// Apply the fields present in `data`; `None` when no row has `id`
///
/// Absent fields keep their stored value. `category` distinguishes
/// "absent" from "set to null" through its outer `Option`.
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    data: &MenuItemUpdate,
) -> DbResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(
        r#"
        UPDATE menu_items SET
            name = COALESCE(?, name),
            price = COALESCE(?, price),
            is_available = COALESCE(?, is_available),
            category = CASE WHEN ? THEN ? ELSE category END
        WHERE id = ?
        RETURNING id, name, price, is_available, category
        "#,
    )
    .bind(data.name.as_deref())
    .bind(data.price)
    .bind(data.is_available)
    .bind(data.category.is_some())
    .bind(data.category.as_ref().and_then(|c| c.as_deref()))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(item)
}

/// Hard delete; `false` when no row has `id`
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> DbResult<bool> {
    let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
