use crate::models::DbNotification;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use openslot_core::models::notification::NotificationKind;

pub async fn create_notification(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    kind: NotificationKind,
    title: &str,
    message: &str,
) -> Result<DbNotification> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let notification = sqlx::query_as::<_, DbNotification>(
        r#"
        INSERT INTO notifications (id, owner_id, kind, title, message, read, created_at)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6)
        RETURNING id, owner_id, kind, title, message, read, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(kind.as_str())
    .bind(title)
    .bind(message)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(notification)
}

pub async fn get_notifications_by_owner_id(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
) -> Result<Vec<DbNotification>> {
    let notifications = sqlx::query_as::<_, DbNotification>(
        r#"
        SELECT id, owner_id, kind, title, message, read, created_at
        FROM notifications
        WHERE owner_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(notifications)
}

pub async fn mark_notification_read(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE notifications
        SET read = TRUE
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
