#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitiesRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i64,
}
