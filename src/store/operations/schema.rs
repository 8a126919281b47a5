use crate::store::error::Result;
use deadpool_postgres::Pool;

/// DDL for the messages table
///
/// Idempotent so the process can start against a database that already has
/// the table. Schema changes beyond this bootstrap are managed externally.
const CREATE_MESSAGES_TABLE: &str = "
CREATE TABLE IF NOT EXISTS messages (
    id         BIGSERIAL PRIMARY KEY,
    body       TEXT NOT NULL,
    username   TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
";

/// Ensure the messages table exists
pub async fn init_schema(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;
    conn.batch_execute(CREATE_MESSAGES_TABLE).await?;
    Ok(())
}
