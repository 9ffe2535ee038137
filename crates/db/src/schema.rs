use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create availability_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL,
            slot_date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'available',
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT valid_status CHECK (status IN ('available', 'booked', 'past'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create notifications table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL,
            kind VARCHAR(16) NOT NULL,
            title VARCHAR(255) NOT NULL,
            message TEXT NOT NULL,
            read BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_kind CHECK (kind IN ('success', 'error', 'info'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_availability_slots_owner_id ON availability_slots(owner_id);
        CREATE INDEX IF NOT EXISTS idx_availability_slots_slot_date ON availability_slots(slot_date);
        CREATE INDEX IF NOT EXISTS idx_availability_slots_status ON availability_slots(status);
        CREATE INDEX IF NOT EXISTS idx_notifications_owner_id ON notifications(owner_id);
        CREATE INDEX IF NOT EXISTS idx_notifications_created_at ON notifications(created_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
