use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const CREATE_EXPERTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS experts (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        full_name VARCHAR(120) NOT NULL,
        expertise_area VARCHAR(200) NOT NULL,
        bio TEXT NULL,
        contact_info VARCHAR(200) NULL,
        meeting_room VARCHAR(500) NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    );
"#;

// Deleting an expert takes its slots with it
const CREATE_SLOTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS slots (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        expert_id UUID NOT NULL REFERENCES experts(id) ON DELETE CASCADE,
        start_at TIMESTAMP WITH TIME ZONE NOT NULL,
        duration_minutes INTEGER NOT NULL DEFAULT 30,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_duration CHECK (duration_minutes BETWEEN 5 AND 240)
    );
"#;

// The unique constraint on slot_id is what closes the double-booking race,
// so it carries a stable name the repositories can rely on
const CREATE_BOOKINGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        slot_id UUID NOT NULL REFERENCES slots(id) ON DELETE CASCADE,
        student_name VARCHAR(120) NOT NULL,
        student_email VARCHAR(200) NOT NULL,
        question TEXT NOT NULL,
        thesis_type VARCHAR(100) NULL,
        program VARCHAR(200) NULL,
        artifacts_link VARCHAR(500) NULL,
        cancellation_code VARCHAR(12) NOT NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT uq_bookings_slot UNIQUE (slot_id)
    );
"#;

const CREATE_INDEXES: [&str; 4] = [
    "CREATE INDEX IF NOT EXISTS idx_slots_expert_id ON slots(expert_id);",
    "CREATE INDEX IF NOT EXISTS idx_slots_start_at ON slots(start_at);",
    "CREATE INDEX IF NOT EXISTS idx_bookings_created_at ON bookings(created_at);",
    "CREATE INDEX IF NOT EXISTS idx_bookings_cancellation_code ON bookings(cancellation_code);",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    sqlx::query(CREATE_EXPERTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_SLOTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_BOOKINGS_TABLE).execute(pool).await?;

    for statement in CREATE_INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_deletion_cascades_through_slots_to_bookings() {
        assert!(CREATE_SLOTS_TABLE.contains("REFERENCES experts(id) ON DELETE CASCADE"));
        assert!(CREATE_BOOKINGS_TABLE.contains("REFERENCES slots(id) ON DELETE CASCADE"));
    }

    #[test]
    fn each_slot_holds_at_most_one_booking() {
        assert!(CREATE_BOOKINGS_TABLE.contains("CONSTRAINT uq_bookings_slot UNIQUE (slot_id)"));
    }
}
