use sqlx::SqliteExecutor;

use crate::models::SignupsRow;

const SQL_LIST_SIGNUPS_FOR_ACTIVITY: &str = r#"
SELECT
  id,
  activity_id,
  email
FROM signups
WHERE activity_id = ?1
ORDER BY id ASC
"#;

pub async fn list_signups_for_activity<'e>(
    executor: impl SqliteExecutor<'e>,
    activity_id: i64,
) -> sqlx::Result<Vec<SignupsRow>> {
    sqlx::query_as::<_, SignupsRow>(SQL_LIST_SIGNUPS_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(executor)
        .await
}

const SQL_INSERT_SIGNUP: &str = r#"
INSERT INTO signups (
  activity_id,
  email
) VALUES (?, ?)
"#;

pub async fn insert_signup<'e>(
    executor: impl SqliteExecutor<'e>,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_SIGNUP)
        .bind(activity_id)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}

// Count and insert run as one statement so concurrent signups cannot push an
// activity past max_participants. Zero rows affected means the activity is full.
const SQL_INSERT_SIGNUP_WITHIN_CAPACITY: &str = r#"
INSERT INTO signups (
  activity_id,
  email
)
SELECT a.id, ?2
FROM activities a
WHERE a.id = ?1
  AND (
    SELECT COUNT(*)
    FROM signups s
    WHERE s.activity_id = a.id
  ) < a.max_participants
"#;

pub async fn insert_signup_within_capacity<'e>(
    executor: impl SqliteExecutor<'e>,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_SIGNUP_WITHIN_CAPACITY)
        .bind(activity_id)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_SIGNUP: &str = r#"
DELETE FROM signups
WHERE activity_id = ?1
  AND email = ?2
"#;

pub async fn delete_signup<'e>(
    executor: impl SqliteExecutor<'e>,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_SIGNUP)
        .bind(activity_id)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}
