use sqlx::SqlitePool;
use tracing::info;

use crate::database::{activities_repo, signups_repo};
use crate::error::AppError;
use crate::models::ActivitiesRow;

async fn load_activity(pool: &SqlitePool, activity_name: &str) -> Result<ActivitiesRow, AppError> {
    activities_repo::load_activity_by_name(pool, activity_name)
        .await?
        .ok_or(AppError::ActivityNotFound)
}

/// Signs `email` up for the named activity and returns the confirmation message.
///
/// Checks run in a fixed order: unknown activity, duplicate signup, full
/// activity. The insert itself is guarded by the unique (activity, email) key
/// and a capacity condition, so a request racing past the checks still fails
/// with the same errors instead of overfilling the activity.
pub async fn sign_up(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    let activity = load_activity(pool, activity_name).await?;
    let signups = signups_repo::list_signups_for_activity(pool, activity.id).await?;

    if signups.iter().any(|s| s.email == email) {
        return Err(AppError::AlreadySignedUp);
    }
    if signups.len() as i64 >= activity.max_participants {
        return Err(AppError::ActivityFull);
    }

    let inserted = signups_repo::insert_signup_within_capacity(pool, activity.id, email)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::AlreadySignedUp,
            other => AppError::Database(other),
        })?;
    if inserted == 0 {
        return Err(AppError::ActivityFull);
    }

    info!(activity = %activity.name, email = %email, "student signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    let activity = load_activity(pool, activity_name).await?;

    let deleted = signups_repo::delete_signup(pool, activity.id, email).await?;
    if deleted == 0 {
        return Err(AppError::NotSignedUp);
    }

    info!(activity = %activity.name, email = %email, "student unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
