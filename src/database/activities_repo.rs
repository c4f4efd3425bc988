use sqlx::SqliteExecutor;

use crate::models::ActivitiesRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY id ASC
"#;

pub async fn list_activities<'e>(
    executor: impl SqliteExecutor<'e>,
) -> sqlx::Result<Vec<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(executor)
        .await
}

const SQL_LOAD_ACTIVITY_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
WHERE name = ?1
LIMIT 1
"#;

pub async fn load_activity_by_name<'e>(
    executor: impl SqliteExecutor<'e>,
    name: &str,
) -> sqlx::Result<Option<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LOAD_ACTIVITY_BY_NAME)
        .bind(name)
        .fetch_optional(executor)
        .await
}

const SQL_ANY_ACTIVITY_EXISTS: &str = r#"
SELECT EXISTS (SELECT 1 FROM activities)
"#;

pub async fn any_activity_exists<'e>(executor: impl SqliteExecutor<'e>) -> sqlx::Result<bool> {
    let exists = sqlx::query_scalar::<_, i64>(SQL_ANY_ACTIVITY_EXISTS)
        .fetch_one(executor)
        .await?;
    Ok(exists == 1)
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub schedule: Option<&'a str>,
    pub max_participants: i64,
}

/// Returns the generated activity id.
pub async fn insert_activity<'e>(
    executor: impl SqliteExecutor<'e>,
    activity: NewActivity<'_>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(executor)
        .await?;
    Ok(res.last_insert_rowid())
}
