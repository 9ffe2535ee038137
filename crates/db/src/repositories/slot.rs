use crate::models::DbAvailabilitySlot;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use openslot_core::models::slot::{AvailabilitySlot, SlotStatus};

pub async fn create_slot(
    pool: &Pool<Postgres>,
    slot: &AvailabilitySlot,
) -> Result<DbAvailabilitySlot> {
    tracing::debug!(
        "Creating slot: id={}, owner_id={}, date={}",
        slot.id,
        slot.owner_id,
        slot.date
    );

    let row = sqlx::query_as::<_, DbAvailabilitySlot>(
        r#"
        INSERT INTO availability_slots (id, owner_id, slot_date, start_time, end_time, status, notes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, owner_id, slot_date, start_time, end_time, status, notes, created_at
        "#,
    )
    .bind(slot.id)
    .bind(slot.owner_id)
    .bind(slot.date)
    .bind(slot.start_time)
    .bind(slot.end_time)
    .bind(slot.status.as_str())
    .bind(&slot.notes)
    .bind(slot.created_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_slots_by_owner_id(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
) -> Result<Vec<DbAvailabilitySlot>> {
    let slots = sqlx::query_as::<_, DbAvailabilitySlot>(
        r#"
        SELECT id, owner_id, slot_date, start_time, end_time, status, notes, created_at
        FROM availability_slots
        WHERE owner_id = $1
        ORDER BY slot_date ASC, start_time ASC, created_at ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn get_slot_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAvailabilitySlot>> {
    let slot = sqlx::query_as::<_, DbAvailabilitySlot>(
        r#"
        SELECT id, owner_id, slot_date, start_time, end_time, status, notes, created_at
        FROM availability_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

pub async fn update_slot_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: SlotStatus,
) -> Result<()> {
    tracing::debug!("Updating slot status: id={}, status={}", id, status);

    sqlx::query(
        r#"
        UPDATE availability_slots
        SET status = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_slot(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Deleting slot: id={}", id);

    sqlx::query(
        r#"
        DELETE FROM availability_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
