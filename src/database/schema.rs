use sqlx::SqlitePool;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL UNIQUE,
  description TEXT,
  schedule TEXT,
  max_participants INTEGER NOT NULL DEFAULT 0 CHECK (max_participants >= 0)
)
"#;

const SQL_CREATE_SIGNUPS: &str = r#"
CREATE TABLE IF NOT EXISTS signups (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  activity_id INTEGER NOT NULL REFERENCES activities (id),
  email TEXT NOT NULL,
  UNIQUE (activity_id, email)
)
"#;

const SQL_CREATE_SIGNUPS_ACTIVITY_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS ix_signups_activity_id ON signups (activity_id)
"#;

pub async fn create_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for statement in [
        SQL_CREATE_ACTIVITIES,
        SQL_CREATE_SIGNUPS,
        SQL_CREATE_SIGNUPS_ACTIVITY_INDEX,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
