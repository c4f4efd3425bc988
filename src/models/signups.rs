// One row per (activity, student email) pair.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupsRow {
    pub id: i64,
    pub activity_id: i64,
    pub email: String,
}
